//! Common types and traits for form submission UseCases

pub mod rules;
pub mod submission;
pub mod usecase_metadata;
pub mod usecase_result;

// Re-exports
pub use submission::{SubmissionError, SubmissionReceipt};
pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::{UseCaseError, UseCaseResult};
