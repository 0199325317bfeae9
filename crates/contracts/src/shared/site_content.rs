//! Site content bundle: every collection the site renders, loaded once.

use super::content_store::ContentStore;
use crate::domain::a001_job::aggregate::Job;
use crate::domain::a002_store::aggregate::Store;
use crate::domain::a003_office::aggregate::Office;
use crate::domain::a004_news::aggregate::NewsArticle;
use crate::domain::a005_division::aggregate::Division;
use crate::domain::a006_partner::aggregate::Partner;
use crate::domain::common::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Счётчик на главной странице ("12,500+ employees")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

/// Raw content as authored (JSON)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub news: Vec<NewsArticle>,
    #[serde(default)]
    pub divisions: Vec<Division>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub stats: Vec<SiteStat>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        let problems = content.clone().into_registry().integrity_problems();
        if !problems.is_empty() {
            anyhow::bail!("site content is inconsistent: {}", problems.join("; "));
        }
        Ok(content)
    }

    pub fn into_registry(self) -> ContentRegistry {
        ContentRegistry {
            jobs: ContentStore::new(self.jobs),
            stores: ContentStore::new(self.stores),
            offices: ContentStore::new(self.offices),
            news: ContentStore::new(self.news),
            divisions: ContentStore::new(self.divisions),
            partners: ContentStore::new(self.partners),
            stats: self.stats,
        }
    }
}

/// One read-only store per collection
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    pub jobs: ContentStore<Job>,
    pub stores: ContentStore<Store>,
    pub offices: ContentStore<Office>,
    pub news: ContentStore<NewsArticle>,
    pub divisions: ContentStore<Division>,
    pub partners: ContentStore<Partner>,
    pub stats: Vec<SiteStat>,
}

impl ContentRegistry {
    /// Record counts per collection, for the startup log
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        counts.insert(Job::COLLECTION, self.jobs.len());
        counts.insert(Store::COLLECTION, self.stores.len());
        counts.insert(Office::COLLECTION, self.offices.len());
        counts.insert(NewsArticle::COLLECTION, self.news.len());
        counts.insert(Division::COLLECTION, self.divisions.len());
        counts.insert(Partner::COLLECTION, self.partners.len());
        counts
    }

    /// Duplicate ids per collection
    pub fn integrity_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut check = |collection: &str, dups: Vec<String>| {
            if !dups.is_empty() {
                problems.push(format!("duplicate {} ids: {}", collection, dups.join(", ")));
            }
        };
        check(Job::COLLECTION, self.jobs.duplicate_ids());
        check(Store::COLLECTION, self.stores.duplicate_ids());
        check(Office::COLLECTION, self.offices.duplicate_ids());
        check(NewsArticle::COLLECTION, self.news.duplicate_ids());
        check(Division::COLLECTION, self.divisions.duplicate_ids());
        check(Partner::COLLECTION, self.partners.duplicate_ids());
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial() {
        let json = r#"{
            "stats": [{ "label": "Employees", "value": 12500, "suffix": "+" }],
            "jobs": [{
                "id": "job-001", "title": "Chef", "department": "Catering",
                "location": "Jeddah", "summary": "", "postedAt": "2025-01-01"
            }]
        }"#;
        let content = SiteContent::from_json(json).unwrap();
        let registry = content.into_registry();
        assert_eq!(registry.jobs.len(), 1);
        assert!(registry.stores.is_empty());
        assert_eq!(registry.stats[0].value, 12500);
        assert_eq!(registry.counts()["jobs"], 1);
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let job = r#"{ "id": "job-001", "title": "Chef", "department": "Catering",
                       "location": "Jeddah", "summary": "", "postedAt": "2025-01-01" }"#;
        let json = format!(r#"{{ "jobs": [{job}, {job}] }}"#);
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate jobs ids: job-001"));
    }
}
