//! Contact form (Contact page)

mod view;
mod view_model;

pub use view::ContactForm;
pub use view_model::ContactViewModel;
