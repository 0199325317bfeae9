//! Site content registry: loaded once at startup, read-only afterwards.

use contracts::domain::common::Record;
use contracts::shared::content_store::ContentStore;
use contracts::shared::filter::{filter_records, FilterCriteria};
use contracts::shared::site_content::{ContentRegistry, SiteContent};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;

/// Content shipped with the binary
const EMBEDDED_CONTENT: &str = include_str!("../../content/site.json");

static REGISTRY: OnceCell<ContentRegistry> = OnceCell::new();

/// Parse site content from an override file or the embedded JSON
pub fn load_content(path: Option<&Path>) -> anyhow::Result<ContentRegistry> {
    let content = match path {
        Some(p) => {
            tracing::info!("Loading site content from: {}", p.display());
            let json = std::fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", p.display(), e))?;
            SiteContent::from_json(&json)?
        }
        None => {
            tracing::info!("Using embedded site content");
            SiteContent::from_json(EMBEDDED_CONTENT)?
        }
    };
    Ok(content.into_registry())
}

pub fn initialize(path: Option<&Path>) -> anyhow::Result<&'static ContentRegistry> {
    let registry = REGISTRY.get_or_try_init(|| load_content(path))?;
    for (collection, count) in registry.counts() {
        tracing::info!("Content: {} = {}", collection, count);
    }
    Ok(registry)
}

/// Registry for handlers; falls back to the embedded content when the
/// server was not initialized (handler tests).
pub fn registry() -> anyhow::Result<&'static ContentRegistry> {
    REGISTRY.get_or_try_init(|| load_content(None))
}

/// Filtered list for a collection from raw query parameters
pub fn list<R: Record>(store: &ContentStore<R>, params: &HashMap<String, String>) -> Vec<R> {
    let criteria: FilterCriteria<R::Field> = FilterCriteria::from_params(params);
    let items = filter_records(store.all(), &criteria);
    tracing::debug!(
        "{}: {} of {} match {:?}",
        R::COLLECTION,
        items.len(),
        store.len(),
        criteria.to_params()
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_job::aggregate::JobField;

    #[test]
    fn test_embedded_content_is_valid() {
        let registry = load_content(None).unwrap();
        assert!(registry.integrity_problems().is_empty());
        assert!(!registry.jobs.is_empty());
        assert!(!registry.stores.is_empty());
        assert!(!registry.offices.is_empty());
        assert!(!registry.news.is_empty());
        assert!(!registry.divisions.is_empty());
        assert!(!registry.partners.is_empty());
        assert!(!registry.stats.is_empty());
        assert_eq!(
            registry.offices.all().iter().filter(|o| o.is_headquarters).count(),
            1
        );
    }

    #[test]
    fn test_list_applies_params() {
        let registry = load_content(None).unwrap();
        let department = registry.jobs.distinct_values(JobField::Department)[0].clone();

        let mut params = HashMap::new();
        params.insert("department".to_string(), department.clone());
        let items = list(&registry.jobs, &params);
        assert!(!items.is_empty());
        assert!(items.iter().all(|j| j.department == department));

        let all = list(&registry.jobs, &HashMap::new());
        assert_eq!(all.len(), registry.jobs.len());
    }

    #[test]
    fn test_missing_override_file() {
        let err = load_content(Some(Path::new("/nonexistent/site.json"))).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
