pub mod request;

pub use request::{ContactField, ContactRequest, ContactRequestSummary, ContactSubject};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitContactRequest;

impl UseCaseMetadata for SubmitContactRequest {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "contact_request"
    }

    fn display_name() -> &'static str {
        "Contact request"
    }

    fn endpoint() -> &'static str {
        "contact"
    }
}
