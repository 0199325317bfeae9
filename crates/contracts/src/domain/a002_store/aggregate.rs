use crate::domain::common::{slug_id, CategoryField, GeoPoint, Record};
use crate::shared::detail::{DetailField, DetailView};
use serde::{Deserialize, Serialize};

slug_id! {
    /// Уникальный идентификатор магазина
    pub struct StoreId;
}

/// Магазин для Store Locator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    /// Brand / operating division
    pub brand: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub opening_hours: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreField {
    City,
    Brand,
}

impl CategoryField for StoreField {
    const ALL: &'static [Self] = &[StoreField::City, StoreField::Brand];

    fn key(&self) -> &'static str {
        match self {
            StoreField::City => "city",
            StoreField::Brand => "brand",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StoreField::City => "City",
            StoreField::Brand => "Brand",
        }
    }
}

impl Record for Store {
    type Id = StoreId;
    type Field = StoreField;

    const COLLECTION: &'static str = "stores";

    fn id(&self) -> &StoreId {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }

    fn category_value(&self, field: StoreField) -> &str {
        match field {
            StoreField::City => self.city.as_str(),
            StoreField::Brand => self.brand.as_str(),
        }
    }
}

impl DetailView for Store {
    fn detail_title(&self) -> String {
        self.name.clone()
    }

    fn detail_subtitle(&self) -> Option<String> {
        Some(format!("{} · {}", self.brand, self.city))
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![DetailField::text("Address", self.address.clone())];
        if !self.opening_hours.is_empty() {
            fields.push(DetailField::text("Opening hours", self.opening_hours.clone()));
        }
        if !self.phone.is_empty() {
            fields.push(DetailField::link(
                "Phone",
                self.phone.clone(),
                format!("tel:{}", self.phone.replace(' ', "")),
            ));
        }
        fields.push(DetailField::link("Directions", "Open in maps", self.location.map_url()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, FilterCriteria};

    fn store(id: &str, name: &str, city: &str, address: &str) -> Store {
        Store {
            id: StoreId::new(id),
            name: name.to_string(),
            brand: "Hypermarket".to_string(),
            city: city.to_string(),
            address: address.to_string(),
            phone: "+966 11 000 0000".to_string(),
            opening_hours: String::new(),
            location: GeoPoint::new(24.7, 46.7),
        }
    }

    #[test]
    fn test_search_covers_name_and_address() {
        let stores = vec![
            store("store-1", "Riyadh Park", "Riyadh", "King Fahd Road"),
            store("store-2", "Red Sea Mall", "Jeddah", "King Abdulaziz Road"),
        ];
        let by_address = FilterCriteria::new().with_query("abdulaziz");
        assert_eq!(filter_records(&stores, &by_address)[0].id.value(), "store-2");

        let by_city = FilterCriteria::new()
            .with_query("king")
            .with_constraint(StoreField::City, "Riyadh");
        let result = filter_records(&stores, &by_city);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.value(), "store-1");
    }

    #[test]
    fn test_detail_phone_link() {
        let s = store("store-1", "Riyadh Park", "Riyadh", "King Fahd Road");
        let fields = s.detail_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields[1],
            DetailField::link("Phone", "+966 11 000 0000", "tel:+966110000000")
        );
    }
}
