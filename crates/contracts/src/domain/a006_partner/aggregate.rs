use crate::domain::a005_division::aggregate::Sector;
use crate::domain::common::{slug_id, CategoryField, Record};
use serde::{Deserialize, Serialize};

slug_id! {
    /// Уникальный идентификатор партнёра
    pub struct PartnerId;
}

/// Партнёр (логотип в бегущей строке на главной)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub sector: Sector,
    pub logo_url: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartnerField {
    Sector,
}

impl CategoryField for PartnerField {
    const ALL: &'static [Self] = &[PartnerField::Sector];

    fn key(&self) -> &'static str {
        "sector"
    }

    fn label(&self) -> &'static str {
        "Sector"
    }
}

impl Record for Partner {
    type Id = PartnerId;
    type Field = PartnerField;

    const COLLECTION: &'static str = "partners";

    fn id(&self) -> &PartnerId {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category_value(&self, field: PartnerField) -> &str {
        match field {
            PartnerField::Sector => self.sector.label(),
        }
    }
}
