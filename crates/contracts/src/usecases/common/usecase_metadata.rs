/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "job_application")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Job application")
    fn display_name() -> &'static str;

    /// Path segment under `/api/forms/`
    fn endpoint() -> &'static str;

    /// Полное имя вида "u501_job_application" (также имя таблицы)
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    fn api_path() -> String {
        format!("/api/forms/{}", Self::endpoint())
    }
}
