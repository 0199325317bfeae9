pub mod request;

pub use request::{JobApplication, JobApplicationField, JobApplicationSummary};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitJobApplication;

impl UseCaseMetadata for SubmitJobApplication {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "job_application"
    }

    fn display_name() -> &'static str {
        "Job application"
    }

    fn endpoint() -> &'static str {
        "job-application"
    }
}
