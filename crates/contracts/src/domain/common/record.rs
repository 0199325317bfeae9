use super::AggregateId;
use std::fmt::Debug;
use std::hash::Hash;

/// Categorical field of a record, used as a filter dimension.
///
/// Every record type declares its own field enum, so asking for a field the
/// record does not have is a compile error rather than a runtime lookup miss.
pub trait CategoryField: Copy + Eq + Hash + Ord + Debug + Send + Sync + 'static {
    /// All fields, in the order filter selects are rendered.
    const ALL: &'static [Self];

    /// Stable key (query parameter name, facet key).
    fn key(&self) -> &'static str;

    /// Human readable label for the filter select.
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Immutable content record exposed by a `ContentStore`.
pub trait Record: Clone {
    type Id: AggregateId;
    type Field: CategoryField;

    /// Collection name used in errors and logs (`jobs`, `stores`, ...)
    const COLLECTION: &'static str;

    fn id(&self) -> &Self::Id;

    /// Fields matched by the free-text query.
    fn searchable_text(&self) -> Vec<&str>;

    /// Value of a categorical field, compared by exact equality.
    fn category_value(&self, field: Self::Field) -> &str;
}
