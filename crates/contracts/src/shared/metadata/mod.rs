//! Field metadata for site forms: validation rules shared by the frontend
//! (inline errors) and the backend (re-validation of submissions).

mod attachment;
mod validation;

pub use attachment::{Attachment, AttachmentRules};
pub use validation::{Pattern, ValidationRules};
