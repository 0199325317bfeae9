use chrono::{DateTime, Utc};
use contracts::usecases::u502_contact_request::{ContactRequest, ContactRequestSummary, ContactSubject};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "u502_contact_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactRequestSummary {
    fn from(m: Model) -> Self {
        ContactRequestSummary {
            reference: Uuid::parse_str(&m.id).unwrap_or_default(),
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            company: m.company,
            subject: ContactSubject::from_key(&m.subject).unwrap_or_default(),
            message: m.message,
            received_at: m.received_at,
        }
    }
}

pub async fn insert(
    reference: Uuid,
    request: &ContactRequest,
    received_at: DateTime<Utc>,
) -> anyhow::Result<Uuid> {
    let conn = get_connection()?;
    let active = ActiveModel {
        id: Set(reference.to_string()),
        full_name: Set(request.full_name.clone()),
        email: Set(request.email.clone()),
        phone: Set(request.phone.clone()),
        company: Set(request.company.clone()),
        subject: Set(request.subject.key().to_string()),
        message: Set(request.message.clone()),
        received_at: Set(received_at),
    };
    active.insert(conn).await?;
    Ok(reference)
}

/// Newest first
pub async fn list_recent() -> anyhow::Result<Vec<ContactRequestSummary>> {
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
