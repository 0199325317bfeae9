use crate::domain::common::{slug_id, CategoryField, GeoPoint, Record};
use crate::shared::detail::{DetailField, DetailView};
use serde::{Deserialize, Serialize};

slug_id! {
    /// Уникальный идентификатор офиса
    pub struct OfficeId;
}

/// Офис группы (страница Contact)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: OfficeId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub is_headquarters: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OfficeField {
    Country,
    City,
}

impl CategoryField for OfficeField {
    const ALL: &'static [Self] = &[OfficeField::Country, OfficeField::City];

    fn key(&self) -> &'static str {
        match self {
            OfficeField::Country => "country",
            OfficeField::City => "city",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OfficeField::Country => "Country",
            OfficeField::City => "City",
        }
    }
}

impl Record for Office {
    type Id = OfficeId;
    type Field = OfficeField;

    const COLLECTION: &'static str = "offices";

    fn id(&self) -> &OfficeId {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str(), self.address.as_str()]
    }

    fn category_value(&self, field: OfficeField) -> &str {
        match field {
            OfficeField::Country => self.country.as_str(),
            OfficeField::City => self.city.as_str(),
        }
    }
}

impl DetailView for Office {
    fn detail_title(&self) -> String {
        self.name.clone()
    }

    fn detail_subtitle(&self) -> Option<String> {
        let place = format!("{}, {}", self.city, self.country);
        if self.is_headquarters {
            Some(format!("Headquarters · {}", place))
        } else {
            Some(place)
        }
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![DetailField::text("Address", self.address.clone())];
        if !self.phone.is_empty() {
            fields.push(DetailField::link(
                "Phone",
                self.phone.clone(),
                format!("tel:{}", self.phone.replace(' ', "")),
            ));
        }
        if !self.email.is_empty() {
            fields.push(DetailField::link(
                "Email",
                self.email.clone(),
                format!("mailto:{}", self.email),
            ));
        }
        fields.push(DetailField::link("Directions", "Open in maps", self.location.map_url()));
        fields
    }
}
