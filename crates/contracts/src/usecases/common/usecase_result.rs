use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Результат выполнения UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Error body returned by the form endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    /// Field key -> message, filled for validation errors
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl UseCaseError {
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const INTERNAL: &'static str = "INTERNAL_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        let mut err = Self::new(Self::VALIDATION, "Some fields are invalid");
        err.errors = errors;
        err
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Self::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == Self::VALIDATION
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for UseCaseError {}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_roundtrip_shape() {
        let mut fields = BTreeMap::new();
        fields.insert("email".to_string(), "Enter a valid email address".to_string());
        let err = UseCaseError::validation(fields);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"]["email"], "Enter a valid email address");
        assert!(err.is_validation());
    }

    #[test]
    fn test_display() {
        let err = UseCaseError::not_found("jobs: record `job-9` not found");
        assert_eq!(err.to_string(), "[NOT_FOUND] jobs: record `job-9` not found");
    }
}
