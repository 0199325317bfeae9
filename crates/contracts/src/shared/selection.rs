//! Selection State: at most one focused record per list.

use super::content_store::{ContentError, ContentStore};
use crate::domain::common::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<R: Record> {
    selected: Option<R::Id>,
}

impl<R: Record> Default for Selection<R> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<R: Record> Selection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a record, replacing any previous selection.
    ///
    /// An id that is not in the store is reported as `NotFound` and the
    /// previous selection is kept.
    pub fn select<'a>(
        &mut self,
        store: &'a ContentStore<R>,
        id: &R::Id,
    ) -> Result<&'a R, ContentError> {
        let record = store.require(id)?;
        self.selected = Some(id.clone());
        Ok(record)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&R::Id> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn current<'a>(&self, store: &'a ContentStore<R>) -> Option<&'a R> {
        self.selected.as_ref().and_then(|id| store.get(id))
    }

    /// Like `current`, but a selection that no longer resolves (the store was
    /// replaced by a reload) is an error instead of an empty pane.
    pub fn resolve<'a>(&self, store: &'a ContentStore<R>) -> Result<Option<&'a R>, ContentError> {
        match &self.selected {
            None => Ok(None),
            Some(id) => store.require(id).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_job::aggregate::{Job, JobId};

    fn store() -> ContentStore<Job> {
        ContentStore::new(vec![
            Job::sample("job-1", "Engineer", "Eng", "Riyadh"),
            Job::sample("job-2", "Chef", "Catering", "Jeddah"),
        ])
    }

    #[test]
    fn test_starts_empty() {
        let s = store();
        let sel = Selection::<Job>::new();
        assert!(sel.current(&s).is_none());
        assert!(sel.selected_id().is_none());
    }

    #[test]
    fn test_select_then_clear() {
        let s = store();
        let mut sel = Selection::new();
        sel.select(&s, &JobId::new("job-1")).unwrap();
        sel.clear();
        assert!(sel.current(&s).is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let s = store();
        let mut sel = Selection::new();
        sel.select(&s, &JobId::new("job-1")).unwrap();
        let second = sel.select(&s, &JobId::new("job-2")).unwrap();
        assert_eq!(second.id.value(), "job-2");
        assert_eq!(sel.current(&s).map(|j| j.id.value()), Some("job-2"));
        assert!(!sel.is_selected(&JobId::new("job-1")));
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let s = store();
        let mut sel = Selection::new();
        sel.select(&s, &JobId::new("job-1")).unwrap();
        let err = sel.select(&s, &JobId::new("job-404")).unwrap_err();
        assert!(matches!(err, ContentError::NotFound { collection: "jobs", .. }));
        assert!(sel.is_selected(&JobId::new("job-1")));
    }

    #[test]
    fn test_resolve_after_reload() {
        let s = store();
        let mut sel = Selection::new();
        sel.select(&s, &JobId::new("job-2")).unwrap();

        let reloaded = ContentStore::new(vec![Job::sample("job-1", "Engineer", "Eng", "Riyadh")]);
        assert!(sel.current(&reloaded).is_none());
        assert!(sel.resolve(&reloaded).is_err());
        assert!(sel.resolve(&s).unwrap().is_some());
    }
}
