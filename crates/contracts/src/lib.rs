//! Contracts shared between the site frontend (wasm) and the backend.
//!
//! - `domain` — content aggregates (jobs, stores, offices, news, divisions, partners)
//! - `shared` — content store, filtering, selection, detail contract, validation, form capture
//! - `usecases` — form submissions (job application, contact request)

pub mod domain;
pub mod shared;
pub mod usecases;
