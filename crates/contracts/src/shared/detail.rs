//! Detail Renderer contract.
//!
//! Records describe themselves as a list of labelled fields; the UI renders a
//! `DetailPane` without knowing which record type it shows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailValue {
    Text { text: String },
    Link { text: String, href: String },
    List { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailField {
    pub label: String,
    pub value: DetailValue,
}

impl DetailField {
    pub fn text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: DetailValue::Text { text: text.into() },
        }
    }

    pub fn link(label: impl Into<String>, text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: DetailValue::Link {
                text: text.into(),
                href: href.into(),
            },
        }
    }

    pub fn list(label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            label: label.into(),
            value: DetailValue::List { items },
        }
    }
}

/// Presentation of a single record in the detail view
pub trait DetailView {
    fn detail_title(&self) -> String;

    fn detail_subtitle(&self) -> Option<String> {
        None
    }

    fn detail_fields(&self) -> Vec<DetailField>;
}

/// State of the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPane {
    #[default]
    Closed,
    Open {
        title: String,
        subtitle: Option<String>,
        fields: Vec<DetailField>,
    },
}

impl DetailPane {
    pub fn from_current<R: DetailView>(current: Option<&R>) -> Self {
        match current {
            None => DetailPane::Closed,
            Some(record) => DetailPane::Open {
                title: record.detail_title(),
                subtitle: record.detail_subtitle(),
                fields: record.detail_fields(),
            },
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailPane::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card(&'static str);

    impl DetailView for Card {
        fn detail_title(&self) -> String {
            self.0.to_string()
        }

        fn detail_fields(&self) -> Vec<DetailField> {
            vec![DetailField::text("Name", self.0)]
        }
    }

    #[test]
    fn test_none_renders_closed() {
        let pane = DetailPane::from_current::<Card>(None);
        assert_eq!(pane, DetailPane::Closed);
        assert!(!pane.is_open());
    }

    #[test]
    fn test_some_renders_fields() {
        let card = Card("Engineer");
        let pane = DetailPane::from_current(Some(&card));
        match pane {
            DetailPane::Open { title, subtitle, fields } => {
                assert_eq!(title, "Engineer");
                assert_eq!(subtitle, None);
                assert_eq!(fields, vec![DetailField::text("Name", "Engineer")]);
            }
            DetailPane::Closed => panic!("expected open pane"),
        }
    }
}
