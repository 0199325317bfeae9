//! Content Store: the authoritative read-only set of records of one collection.

use crate::domain::common::{AggregateId, CategoryField, Record};
use std::collections::{BTreeMap, HashSet};

/// Ошибки доступа к контенту
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{collection}: record `{id}` not found")]
    NotFound {
        collection: &'static str,
        id: String,
    },
}

impl ContentError {
    pub fn not_found<R: Record>(id: &R::Id) -> Self {
        ContentError::NotFound {
            collection: R::COLLECTION,
            id: id.as_string(),
        }
    }
}

/// Read-only, insertion-ordered collection of records
#[derive(Debug, Clone)]
pub struct ContentStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for ContentStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> ContentStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records in insertion order
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn require(&self, id: &R::Id) -> Result<&R, ContentError> {
        self.get(id).ok_or_else(|| ContentError::not_found::<R>(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique values of a categorical field, in first-seen order.
    /// Empty values are skipped: they mean "no value", not an option.
    pub fn distinct_values(&self, field: R::Field) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in &self.records {
            let value = record.category_value(field);
            if value.is_empty() {
                continue;
            }
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Distinct values for every categorical field, keyed by field key
    pub fn facets(&self) -> BTreeMap<String, Vec<String>> {
        R::Field::ALL
            .iter()
            .map(|f| (f.key().to_string(), self.distinct_values(*f)))
            .collect()
    }

    /// Records whose ids are duplicated (content authoring error)
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for record in &self.records {
            let id = record.id().as_string();
            if !seen.insert(id.clone()) && !dups.contains(&id) {
                dups.push(id);
            }
        }
        dups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_job::aggregate::{Job, JobField, JobId};

    fn store() -> ContentStore<Job> {
        ContentStore::new(vec![
            Job::sample("job-1", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-2", "Chef", "Catering", "Jeddah"),
            Job::sample("job-3", "Sous Chef", "Catering", "Riyadh"),
        ])
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let s = store();
        let ids: Vec<&str> = s.all().iter().map(|j| j.id.value()).collect();
        assert_eq!(ids, vec!["job-1", "job-2", "job-3"]);
    }

    #[test]
    fn test_distinct_values_deduplicated() {
        let s = store();
        assert_eq!(s.distinct_values(JobField::Department), vec!["Eng", "Catering"]);
        assert_eq!(s.distinct_values(JobField::Location), vec!["Riyadh", "Jeddah"]);
    }

    #[test]
    fn test_distinct_values_skip_empty() {
        let s = ContentStore::new(vec![
            Job::sample("job-1", "Engineer", "", "Riyadh"),
            Job::sample("job-2", "Chef", "Catering", "Riyadh"),
        ]);
        assert_eq!(s.distinct_values(JobField::Department), vec!["Catering"]);
    }

    #[test]
    fn test_require_missing_id() {
        let s = store();
        let err = s.require(&JobId::new("job-9")).unwrap_err();
        assert_eq!(
            err,
            ContentError::NotFound {
                collection: "jobs",
                id: "job-9".to_string()
            }
        );
        assert_eq!(err.to_string(), "jobs: record `job-9` not found");
    }

    #[test]
    fn test_facets_cover_all_fields() {
        let facets = store().facets();
        assert_eq!(facets.len(), JobField::ALL.len());
        assert_eq!(facets["department"], vec!["Eng", "Catering"]);
    }

    #[test]
    fn test_duplicate_ids() {
        let s = ContentStore::new(vec![
            Job::sample("job-1", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-1", "Chef", "Catering", "Jeddah"),
        ]);
        assert_eq!(s.duplicate_ids(), vec!["job-1"]);
        assert!(store().duplicate_ids().is_empty());
    }

    #[test]
    fn test_empty_store() {
        let s: ContentStore<Job> = ContentStore::default();
        assert!(s.is_empty());
        assert!(s.distinct_values(JobField::Location).is_empty());
    }
}
