//! Common types and traits for all content aggregates

pub mod aggregate_id;
pub mod geo;
pub mod record;

// Re-exports
pub use aggregate_id::{validate_slug, AggregateId};
pub(crate) use aggregate_id::slug_id;
pub use geo::GeoPoint;
pub use record::{CategoryField, Record};
