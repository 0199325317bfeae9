use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::common::{SubmissionReceipt, UseCaseError};
use contracts::usecases::u501_job_application::{JobApplication, JobApplicationSummary};
use contracts::usecases::u502_contact_request::{ContactRequest, ContactRequestSummary};

use crate::usecases::{u501_job_application, u502_contact_request};

/// Ошибка формы: код ответа выводится из `UseCaseError::code`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub UseCaseError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code.as_str() {
            UseCaseError::VALIDATION => StatusCode::UNPROCESSABLE_ENTITY,
            UseCaseError::NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Form submission failed: {}", self.0);
        } else {
            tracing::warn!("Form submission rejected: {}", self.0);
        }
        (status, Json(self.0)).into_response()
    }
}

/// POST /api/forms/job-application
pub async fn submit_job_application(
    Json(request): Json<JobApplication>,
) -> Result<Json<SubmissionReceipt>, ApiError> {
    let receipt = u501_job_application::service::submit(request).await?;
    Ok(Json(receipt))
}

/// GET /api/forms/job-application
pub async fn list_job_applications() -> Result<Json<Vec<JobApplicationSummary>>, StatusCode> {
    match u501_job_application::service::list_recent().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list job applications: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/forms/contact
pub async fn submit_contact(
    Json(request): Json<ContactRequest>,
) -> Result<Json<SubmissionReceipt>, ApiError> {
    let receipt = u502_contact_request::service::submit(request).await?;
    Ok(Json(receipt))
}

/// GET /api/forms/contact
pub async fn list_contact_requests() -> Result<Json<Vec<ContactRequestSummary>>, StatusCode> {
    match u502_contact_request::service::list_recent().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list contact requests: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError(UseCaseError::validation(Default::default()));
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ApiError(UseCaseError::not_found("job")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(UseCaseError::internal("db")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // Единственный тест с БД: соединение глобальное и живёт в рантайме теста
    #[tokio::test]
    async fn test_submissions_are_stored_newest_first() {
        use base64::Engine;
        use contracts::domain::a001_job::aggregate::JobId;
        use contracts::shared::metadata::Attachment;
        use contracts::usecases::u502_contact_request::ContactSubject;

        let db_file = std::env::temp_dir().join(format!("site-forms-{}.db", uuid::Uuid::new_v4()));
        crate::shared::data::db::initialize_database(&db_file)
            .await
            .unwrap();

        let contact = |message: &str| ContactRequest {
            full_name: "Lina Saleh".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+966 55 123 4567".to_string(),
            company: "Najd Dairy".to_string(),
            subject: ContactSubject::Partnerships,
            message: message.to_string(),
        };
        let Json(first) = submit_contact(Json(contact("First message about supply.")))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let Json(second) = submit_contact(Json(contact("Second message about supply.")))
            .await
            .unwrap();

        let Json(stored) = list_contact_requests().await.unwrap();
        let references: Vec<_> = stored.iter().map(|s| s.reference).collect();
        assert_eq!(references, vec![second.reference, first.reference]);
        assert_eq!(stored[0].subject, ContactSubject::Partnerships);

        let application = JobApplication {
            job_id: Some(JobId::new("job-002")),
            full_name: "Omar Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: "+966 50 000 0000".to_string(),
            cover_letter: "Ten years in hospitality management.".to_string(),
            resume: Some(Attachment {
                file_name: "cv.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                size_bytes: 3,
                content_base64: base64::engine::general_purpose::STANDARD.encode(b"abc"),
            }),
        };
        let Json(receipt) = submit_job_application(Json(application)).await.unwrap();
        let Json(applications) = list_job_applications().await.unwrap();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].reference, receipt.reference);
        assert_eq!(applications[0].job_title.as_deref(), Some("Executive Chef"));
        assert_eq!(applications[0].resume_file_name.as_deref(), Some("cv.pdf"));

        let _ = std::fs::remove_file(db_file);
    }
}
