use crate::domain::common::{slug_id, CategoryField, Record};
use crate::shared::detail::{DetailField, DetailView};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

slug_id! {
    /// Уникальный идентификатор новости
    pub struct NewsId;
}

/// Рубрика новости; icon and accent colour are resolved per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    Corporate,
    Expansion,
    Partnership,
    Sustainability,
    Community,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::Corporate,
        NewsCategory::Expansion,
        NewsCategory::Partnership,
        NewsCategory::Sustainability,
        NewsCategory::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Corporate => "Corporate",
            NewsCategory::Expansion => "Expansion",
            NewsCategory::Partnership => "Partnership",
            NewsCategory::Sustainability => "Sustainability",
            NewsCategory::Community => "Community",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NewsCategory::Corporate => "building",
            NewsCategory::Expansion => "trending-up",
            NewsCategory::Partnership => "handshake",
            NewsCategory::Sustainability => "leaf",
            NewsCategory::Community => "users",
        }
    }

    /// CSS custom property with the badge colour
    pub fn accent(&self) -> &'static str {
        match self {
            NewsCategory::Corporate => "var(--color-news-corporate)",
            NewsCategory::Expansion => "var(--color-news-expansion)",
            NewsCategory::Partnership => "var(--color-news-partnership)",
            NewsCategory::Sustainability => "var(--color-news-sustainability)",
            NewsCategory::Community => "var(--color-news-community)",
        }
    }
}

/// Новость / пресс-релиз
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    /// Paragraphs
    #[serde(default)]
    pub body: Vec<String>,
    pub category: NewsCategory,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NewsField {
    Category,
}

impl CategoryField for NewsField {
    const ALL: &'static [Self] = &[NewsField::Category];

    fn key(&self) -> &'static str {
        "category"
    }

    fn label(&self) -> &'static str {
        "Category"
    }
}

impl Record for NewsArticle {
    type Id = NewsId;
    type Field = NewsField;

    const COLLECTION: &'static str = "news";

    fn id(&self) -> &NewsId {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn category_value(&self, field: NewsField) -> &str {
        match field {
            NewsField::Category => self.category.label(),
        }
    }
}

impl DetailView for NewsArticle {
    fn detail_title(&self) -> String {
        self.title.clone()
    }

    fn detail_subtitle(&self) -> Option<String> {
        Some(format!(
            "{} · {}",
            self.category.label(),
            self.published_at.format("%d %B %Y")
        ))
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![DetailField::text("Summary", self.summary.clone())];
        if !self.body.is_empty() {
            fields.push(DetailField::list("Article", self.body.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_store::ContentStore;
    use crate::shared::filter::{filter_records, FilterCriteria};

    fn article(id: &str, title: &str, category: NewsCategory) -> NewsArticle {
        NewsArticle {
            id: NewsId::new(id),
            title: title.to_string(),
            summary: format!("{} summary", title),
            body: Vec::new(),
            category,
            published_at: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            image_url: None,
        }
    }

    #[test]
    fn test_filter_by_category_label() {
        let news = vec![
            article("news-1", "New flagship opens", NewsCategory::Expansion),
            article("news-2", "Solar roofs", NewsCategory::Sustainability),
            article("news-3", "Second branch opens", NewsCategory::Expansion),
        ];
        let criteria = FilterCriteria::new()
            .with_query("opens")
            .with_constraint(NewsField::Category, "Expansion");
        let ids: Vec<String> = filter_records(&news, &criteria)
            .into_iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(ids, vec!["news-1", "news-3"]);

        let store = ContentStore::new(news);
        assert_eq!(
            store.distinct_values(NewsField::Category),
            vec!["Expansion", "Sustainability"]
        );
    }

    #[test]
    fn test_category_serde() {
        let c: NewsCategory = serde_json::from_str("\"sustainability\"").unwrap();
        assert_eq!(c, NewsCategory::Sustainability);
        assert_eq!(c.icon(), "leaf");
    }

    #[test]
    fn test_subtitle_format() {
        let a = article("news-1", "New flagship opens", NewsCategory::Expansion);
        assert_eq!(a.detail_subtitle().as_deref(), Some("Expansion · 10 February 2025"));
    }
}
