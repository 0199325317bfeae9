//! Состояние страницы-списка: загруженная коллекция, критерии фильтра,
//! выбранная запись. Один экземпляр на страницу.

use contracts::domain::common::Record;
use contracts::shared::content_store::ContentStore;
use contracts::shared::detail::{DetailPane, DetailView};
use contracts::shared::filter::{filter_records, FilterCriteria};
use contracts::shared::selection::Selection;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::url_state;

pub struct RecordListState<R>
where
    R: Record + Send + Sync + 'static,
{
    pub store: RwSignal<ContentStore<R>>,
    pub criteria: RwSignal<FilterCriteria<R::Field>>,
    pub selection: RwSignal<Selection<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<R> Clone for RecordListState<R>
where
    R: Record + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RecordListState<R> where R: Record + Send + Sync + 'static {}

impl<R> Default for RecordListState<R>
where
    R: Record + DetailView + DeserializeOwned + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordListState<R>
where
    R: Record + DetailView + DeserializeOwned + Send + Sync + 'static,
{
    /// Empty state; criteria start from the page URL
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(ContentStore::default()),
            criteria: RwSignal::new(FilterCriteria::from_params(&url_state::read_params())),
            selection: RwSignal::new(Selection::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the whole collection once; filtering happens locally
    pub fn load(&self, path: &'static str) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match get_json::<Vec<R>>(path).await {
                Ok(items) => {
                    log::debug!("{}: loaded {}", R::COLLECTION, items.len());
                    this.store.set(ContentStore::new(items));
                }
                Err(e) => {
                    log::error!("{}: {}", R::COLLECTION, e);
                    this.error.set(Some(format!("Could not load {}: {}", R::COLLECTION, e)));
                }
            }
            this.loading.set(false);
        });
    }

    /// Records matching the current criteria, in store order
    pub fn visible(&self) -> Signal<Vec<R>> {
        let store = self.store;
        let criteria = self.criteria;
        Signal::derive(move || store.with(|s| criteria.with(|c| filter_records(s.all(), c))))
    }

    pub fn total(&self) -> Signal<usize> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.len()))
    }

    /// Options of one filter select
    pub fn facet(&self, field: R::Field) -> Signal<Vec<String>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.distinct_values(field)))
    }

    pub fn set_query(&self, query: String) {
        self.criteria.update(|c| c.set_query(query));
        self.sync_url();
    }

    pub fn set_constraint(&self, field: R::Field, value: String) {
        self.criteria.update(|c| c.set_constraint(field, value));
        self.sync_url();
    }

    pub fn reset_filters(&self) {
        self.criteria.update(|c| c.reset());
        self.sync_url();
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let criteria = self.criteria;
        Signal::derive(move || {
            criteria.with(|c| {
                let query = usize::from(c.normalized_query().is_some());
                query + c.active_constraints().count()
            })
        })
    }

    /// Open the detail of a record; an unknown id keeps the current selection
    pub fn select(&self, id: R::Id) {
        let store = self.store;
        self.selection.update(|sel| {
            store.with_untracked(|s| {
                if let Err(e) = sel.select(s, &id) {
                    log::warn!("{}", e);
                }
            })
        });
    }

    /// Close the detail; criteria stay as they are
    pub fn clear_selection(&self) {
        self.selection.update(|sel| sel.clear());
    }

    pub fn selected(&self) -> Signal<Option<R>> {
        let store = self.store;
        let selection = self.selection;
        Signal::derive(move || store.with(|s| selection.with(|sel| sel.current(s).cloned())))
    }

    pub fn pane(&self) -> Signal<DetailPane> {
        let store = self.store;
        let selection = self.selection;
        Signal::derive(move || {
            store.with(|s| selection.with(|sel| DetailPane::from_current(sel.current(s))))
        })
    }

    fn sync_url(&self) {
        let params = self.criteria.with_untracked(|c| c.to_params());
        url_state::write_params(&params);
    }
}
