//! Field rules shared by the site forms

use crate::shared::metadata::{AttachmentRules, Pattern, ValidationRules};

pub const NAME: ValidationRules = ValidationRules::required().with_length(Some(2), Some(100));

pub const EMAIL: ValidationRules = ValidationRules::required()
    .with_length(None, Some(254))
    .with_pattern(Pattern::Email, "Enter a valid email address");

/// Any non-empty number; formats differ too much across the region to be stricter
pub const PHONE: ValidationRules = ValidationRules::required().with_length(None, Some(30));

pub const MESSAGE: ValidationRules = ValidationRules::required().with_length(Some(10), Some(5000));

pub const COMPANY: ValidationRules = ValidationRules::none().with_length(None, Some(200));

pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const RESUME: AttachmentRules = AttachmentRules {
    required: true,
    allowed_extensions: &["pdf", "doc", "docx"],
    allowed_mime_types: &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ],
    max_size_bytes: MAX_RESUME_BYTES,
};
