use crate::domain::common::{slug_id, CategoryField, Record};
use crate::shared::detail::{DetailField, DetailView};
use serde::{Deserialize, Serialize};

slug_id! {
    /// Уникальный идентификатор подразделения (направления бизнеса)
    pub struct DivisionId;
}

/// Отрасль; drives the card icon and accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Retail,
    Hospitality,
    Catering,
    Logistics,
    RealEstate,
    Technology,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Retail => "Retail",
            Sector::Hospitality => "Hospitality",
            Sector::Catering => "Catering",
            Sector::Logistics => "Logistics",
            Sector::RealEstate => "Real Estate",
            Sector::Technology => "Technology",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sector::Retail => "shopping-bag",
            Sector::Hospitality => "bed",
            Sector::Catering => "utensils",
            Sector::Logistics => "truck",
            Sector::RealEstate => "building",
            Sector::Technology => "cpu",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Sector::Retail => "#c0392b",
            Sector::Hospitality => "#8e44ad",
            Sector::Catering => "#d35400",
            Sector::Logistics => "#2c3e50",
            Sector::RealEstate => "#16a085",
            Sector::Technology => "#2980b9",
        }
    }
}

/// Headline figure on a division card (`"120"`, `"stores"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

/// Направление бизнеса группы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
    pub sector: Sector,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DivisionField {
    Sector,
}

impl CategoryField for DivisionField {
    const ALL: &'static [Self] = &[DivisionField::Sector];

    fn key(&self) -> &'static str {
        "sector"
    }

    fn label(&self) -> &'static str {
        "Sector"
    }
}

impl Record for Division {
    type Id = DivisionId;
    type Field = DivisionField;

    const COLLECTION: &'static str = "divisions";

    fn id(&self) -> &DivisionId {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.tagline.as_str()]
    }

    fn category_value(&self, field: DivisionField) -> &str {
        match field {
            DivisionField::Sector => self.sector.label(),
        }
    }
}

impl DetailView for Division {
    fn detail_title(&self) -> String {
        self.name.clone()
    }

    fn detail_subtitle(&self) -> Option<String> {
        Some(self.tagline.clone())
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::text("Sector", self.sector.label()),
            DetailField::text("Overview", self.description.clone()),
        ];
        if !self.highlights.is_empty() {
            fields.push(DetailField::list(
                "Highlights",
                self.highlights
                    .iter()
                    .map(|h| format!("{} {}", h.value, h.label))
                    .collect(),
            ));
        }
        if let Some(site) = &self.website {
            fields.push(DetailField::link("Website", site.clone(), site.clone()));
        }
        fields
    }
}
