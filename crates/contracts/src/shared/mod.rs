pub mod animation;
pub mod content_store;
pub mod detail;
pub mod filter;
pub mod form_capture;
pub mod format;
pub mod metadata;
pub mod selection;
pub mod site_content;
