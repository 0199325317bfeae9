use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_job_application::SubmitJobApplication;
use contracts::usecases::u502_contact_request::SubmitContactRequest;
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Form submission tables (minimal schema bootstrap); table name = use case full name
fn schema() -> Vec<(String, String)> {
    let applications = SubmitJobApplication::full_name();
    let contacts = SubmitContactRequest::full_name();
    vec![
        (
            format!(
                r#"
        CREATE TABLE IF NOT EXISTS {applications} (
            id TEXT PRIMARY KEY NOT NULL,
            job_id TEXT,
            job_title TEXT,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            cover_letter TEXT NOT NULL,
            resume_file_name TEXT,
            resume_mime_type TEXT,
            resume_size_bytes INTEGER,
            resume_sha256 TEXT,
            resume_content BLOB,
            received_at TEXT NOT NULL
        );
        "#
            ),
            applications,
        ),
        (
            format!(
                r#"
        CREATE TABLE IF NOT EXISTS {contacts} (
            id TEXT PRIMARY KEY NOT NULL,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            company TEXT NOT NULL DEFAULT '',
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            received_at TEXT NOT NULL
        );
        "#
            ),
            contacts,
        ),
    ]
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    for (ddl, table) in schema() {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl))
            .await?;
        tracing::debug!("Table {} is ready", table);
    }

    if DB_CONN.set(conn).is_err() {
        tracing::warn!("Database connection already initialized");
    }
    tracing::info!("Database ready at {}", normalized);
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{u501_job_application, u502_contact_request};
    use sea_orm::EntityName;

    #[test]
    fn test_schema_tables_match_entities() {
        let tables: Vec<String> = schema().into_iter().map(|(_, table)| table).collect();
        assert_eq!(
            tables,
            vec![
                u501_job_application::repository::Entity.table_name().to_string(),
                u502_contact_request::repository::Entity.table_name().to_string(),
            ]
        );
        assert_eq!(tables[0], "u501_job_application");
    }

    #[test]
    fn test_schema_ddl_names_its_table() {
        for (ddl, table) in schema() {
            assert!(ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)));
        }
    }
}
