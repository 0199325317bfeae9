//! Validation rules for metadata fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Practical e-mail address check: local part, `@`, dotted domain with a TLD
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Format checks available to field rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
}

impl Pattern {
    pub fn is_match(self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_RE.is_match(value),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min_length: min,
            max_length: max,
            ..self
        }
    }

    pub const fn with_pattern(self, pattern: Pattern, error: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            custom_error: Some(error),
            ..self
        }
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters after trimming, so Arabic names are
    /// measured the same way as Latin ones. An optional empty field skips the
    /// remaining checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(match self.custom_error {
                    Some(msg) => msg.to_string(),
                    None => format!("{} has an invalid format", field_label),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: ValidationRules = ValidationRules::required().with_length(Some(2), Some(10));
    const EMAIL: ValidationRules =
        ValidationRules::required().with_pattern(Pattern::Email, "Enter a valid email address");

    #[test]
    fn test_required() {
        assert_eq!(NAME.validate_string("  ", "Name"), Err("Name is required".to_string()));
        assert!(ValidationRules::none().validate_string("", "Company").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(NAME.validate_string("A", "Name").is_err());
        assert!(NAME.validate_string("عمر", "Name").is_ok());
        assert_eq!(
            NAME.validate_string("Abdulrahman Al", "Name"),
            Err("Name must not exceed 10 characters".to_string())
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL.validate_string("a@b.com", "Email").is_ok());
        assert!(EMAIL.validate_string("first.last+hr@group.com.sa", "Email").is_ok());
        assert_eq!(
            EMAIL.validate_string("not-an-email", "Email"),
            Err("Enter a valid email address".to_string())
        );
        assert!(EMAIL.validate_string("a@b", "Email").is_err());
    }
}
