//! Job application form
//!
//! MVVM:
//! - model.rs: reading the resume file into an `Attachment`
//! - view_model.rs: form controller and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::JobApplicationForm;
pub use view_model::JobApplicationViewModel;
