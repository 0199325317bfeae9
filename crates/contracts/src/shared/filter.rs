//! Filter Predicate Engine: free-text query plus categorical equality constraints.

use crate::domain::common::{CategoryField, Record};
use std::collections::{BTreeMap, HashMap};

/// Query parameter carrying the free-text search
pub const QUERY_PARAM: &str = "query";

/// User-owned filter state for one list.
///
/// An empty constraint value means "match all" for that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<F: CategoryField> {
    query: String,
    constraints: BTreeMap<F, String>,
}

impl<F: CategoryField> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            constraints: BTreeMap::new(),
        }
    }
}

impl<F: CategoryField> FilterCriteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_constraint(mut self, field: F, value: impl Into<String>) -> Self {
        self.set_constraint(field, value);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Setting an empty value removes the constraint
    pub fn set_constraint(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.constraints.remove(&field);
        } else {
            self.constraints.insert(field, value);
        }
    }

    pub fn clear_constraint(&mut self, field: F) {
        self.constraints.remove(&field);
    }

    /// Current constraint value, "" when unconstrained
    pub fn constraint(&self, field: F) -> &str {
        self.constraints.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn active_constraints(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.constraints.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.constraints.clear();
    }

    /// No query and no constraints: the filter is the identity
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none() && self.constraints.is_empty()
    }

    /// Trimmed, lowercased query; `None` when blank
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        let query_ok = match self.normalized_query() {
            None => true,
            Some(q) => record
                .searchable_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&q)),
        };
        query_ok
            && self
                .constraints
                .iter()
                .all(|(field, value)| record.category_value(*field) == value)
    }

    /// Build criteria from query parameters (`query`, plus one key per field).
    /// Unknown keys are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut criteria = Self::new();
        for (key, value) in params {
            if key == QUERY_PARAM {
                criteria.set_query(value.clone());
            } else if let Some(field) = F::from_key(key) {
                criteria.set_constraint(field, value.clone());
            }
        }
        criteria
    }

    /// Inverse of `from_params`; blank entries are omitted
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if self.normalized_query().is_some() {
            params.push((QUERY_PARAM.to_string(), self.query.trim().to_string()));
        }
        for (field, value) in &self.constraints {
            params.push((field.key().to_string(), value.clone()));
        }
        params
    }
}

/// Stable filter: returns a new vector in the original order, never mutates `records`.
pub fn filter_records<R: Record>(records: &[R], criteria: &FilterCriteria<R::Field>) -> Vec<R> {
    if criteria.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_job::aggregate::{Job, JobField};

    fn jobs() -> Vec<Job> {
        vec![
            Job::sample("job-1", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-2", "Chef", "Catering", "Jeddah"),
        ]
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.value()).collect()
    }

    #[test]
    fn test_department_constraint() {
        let criteria = FilterCriteria::new().with_constraint(JobField::Department, "Catering");
        let result = filter_records(&jobs(), &criteria);
        assert_eq!(ids(&result), vec!["job-2"]);
    }

    #[test]
    fn test_query_matches_title_only() {
        // "eng" is also the department of job-1, but only the title is searchable
        let records = vec![
            Job::sample("job-1", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-2", "Chef", "Eng", "Jeddah"),
        ];
        let criteria = FilterCriteria::new().with_query("eng");
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["job-1"]);
    }

    #[test]
    fn test_empty_records() {
        let criteria = FilterCriteria::new()
            .with_query("chef")
            .with_constraint(JobField::Location, "Jeddah");
        assert!(filter_records::<Job>(&[], &criteria).is_empty());
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = jobs();
        let result = filter_records(&records, &FilterCriteria::new());
        assert_eq!(ids(&result), ids(&records));
    }

    #[test]
    fn test_blank_query_is_identity() {
        let records = jobs();
        let criteria = FilterCriteria::new()
            .with_query("   ")
            .with_constraint(JobField::Department, "");
        assert!(criteria.is_empty());
        assert_eq!(filter_records(&records, &criteria).len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let criteria = FilterCriteria::new().with_query("  cHEF ");
        assert_eq!(ids(&filter_records(&jobs(), &criteria)), vec!["job-2"]);
    }

    #[test]
    fn test_constraint_is_exact_equality() {
        let criteria = FilterCriteria::new().with_constraint(JobField::Location, "riyadh");
        assert!(filter_records(&jobs(), &criteria).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let records = vec![
            Job::sample("job-1", "Line Cook", "Catering", "Riyadh"),
            Job::sample("job-2", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-3", "Pastry Cook", "Catering", "Jeddah"),
            Job::sample("job-4", "Head Cook", "Catering", "Riyadh"),
        ];
        let criteria = FilterCriteria::new()
            .with_query("cook")
            .with_constraint(JobField::Location, "Riyadh");
        let result = filter_records(&records, &criteria);
        assert_eq!(ids(&result), vec!["job-1", "job-4"]);
        for job in &result {
            assert_eq!(job.location, "Riyadh");
            assert!(job.title.to_lowercase().contains("cook"));
        }
        // input untouched
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_set_empty_constraint_removes_it() {
        let mut criteria = FilterCriteria::new().with_constraint(JobField::Department, "Eng");
        assert_eq!(criteria.constraint(JobField::Department), "Eng");
        criteria.set_constraint(JobField::Department, "");
        assert_eq!(criteria.constraint(JobField::Department), "");
        assert_eq!(criteria.active_constraints().count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut criteria = FilterCriteria::new()
            .with_query("chef")
            .with_constraint(JobField::Location, "Jeddah");
        criteria.reset();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_from_params_ignores_unknown_keys() {
        let mut params = HashMap::new();
        params.insert("query".to_string(), "eng".to_string());
        params.insert("location".to_string(), "Riyadh".to_string());
        params.insert("salary".to_string(), "high".to_string());
        let criteria: FilterCriteria<JobField> = FilterCriteria::from_params(&params);
        assert_eq!(criteria.query(), "eng");
        assert_eq!(criteria.constraint(JobField::Location), "Riyadh");
        assert_eq!(criteria.active_constraints().count(), 1);
    }

    #[test]
    fn test_to_params() {
        let criteria = FilterCriteria::new()
            .with_query(" eng ")
            .with_constraint(JobField::Department, "Eng");
        assert_eq!(
            criteria.to_params(),
            vec![
                ("query".to_string(), "eng".to_string()),
                ("department".to_string(), "Eng".to_string()),
            ]
        );
    }
}
