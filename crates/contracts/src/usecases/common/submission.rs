use super::UseCaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Ответ сервера на успешную отправку формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(received_at: DateTime<Utc>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at,
        }
    }

    /// Short reference shown to the visitor (`A1B2C3D4`)
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

/// Failure of the submit call. Recoverable: the form keeps its values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("no response within {seconds} s, please try again")]
    Timeout { seconds: i64 },
    #[error("the server rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("some fields were rejected by the server")]
    Invalid { fields: BTreeMap<String, String> },
    #[error("network error: {0}")]
    Network(String),
}

impl SubmissionError {
    /// Map an HTTP error response body to a submission error
    pub fn from_response(status: u16, body: Option<UseCaseError>) -> Self {
        match body {
            Some(err) if err.is_validation() => SubmissionError::Invalid { fields: err.errors },
            Some(err) => SubmissionError::Rejected {
                status,
                message: err.message,
            },
            None => SubmissionError::Rejected {
                status,
                message: format!("HTTP {}", status),
            },
        }
    }
}
