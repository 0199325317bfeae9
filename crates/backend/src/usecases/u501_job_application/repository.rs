use chrono::{DateTime, Utc};
use contracts::usecases::u501_job_application::JobApplicationSummary;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "u501_job_application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub resume_file_name: Option<String>,
    pub resume_mime_type: Option<String>,
    pub resume_size_bytes: Option<i64>,
    pub resume_sha256: Option<String>,
    pub resume_content: Option<Vec<u8>>,
    pub received_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JobApplicationSummary {
    fn from(m: Model) -> Self {
        JobApplicationSummary {
            reference: Uuid::parse_str(&m.id).unwrap_or_default(),
            job_id: m.job_id,
            job_title: m.job_title,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            resume_file_name: m.resume_file_name,
            received_at: m.received_at,
        }
    }
}

/// Готовая к сохранению запись отклика
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub reference: Uuid,
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub resume: Option<StoredResume>,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredResume {
    pub file_name: String,
    pub mime_type: String,
    pub sha256: String,
    pub content: Vec<u8>,
}

pub async fn insert(record: NewApplication) -> anyhow::Result<Uuid> {
    let conn = get_connection()?;
    let reference = record.reference;
    let resume = record.resume;
    let active = ActiveModel {
        id: Set(reference.to_string()),
        job_id: Set(record.job_id),
        job_title: Set(record.job_title),
        full_name: Set(record.full_name),
        email: Set(record.email),
        phone: Set(record.phone),
        cover_letter: Set(record.cover_letter),
        resume_file_name: Set(resume.as_ref().map(|r| r.file_name.clone())),
        resume_mime_type: Set(resume.as_ref().map(|r| r.mime_type.clone())),
        resume_size_bytes: Set(resume.as_ref().map(|r| r.content.len() as i64)),
        resume_sha256: Set(resume.as_ref().map(|r| r.sha256.clone())),
        resume_content: Set(resume.map(|r| r.content)),
        received_at: Set(record.received_at),
    };
    active.insert(conn).await?;
    Ok(reference)
}

/// Newest first
pub async fn list_recent() -> anyhow::Result<Vec<JobApplicationSummary>> {
    let conn = get_connection()?;
    let items = Entity::find()
        .order_by_desc(Column::ReceivedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
