use crate::shared::form_capture::{FieldErrors, FormField, FormValue};
use crate::usecases::common::rules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Тема обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    #[default]
    General,
    Careers,
    Partnerships,
    Media,
    Leasing,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::General,
        ContactSubject::Careers,
        ContactSubject::Partnerships,
        ContactSubject::Media,
        ContactSubject::Leasing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Careers => "careers",
            ContactSubject::Partnerships => "partnerships",
            ContactSubject::Media => "media",
            ContactSubject::Leasing => "leasing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::General => "General enquiry",
            ContactSubject::Careers => "Careers",
            ContactSubject::Partnerships => "Partnerships",
            ContactSubject::Media => "Media & press",
            ContactSubject::Leasing => "Leasing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Обращение с формы Contact
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: ContactSubject,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Company,
    Message,
}

impl FormField for ContactField {
    const ALL: &'static [Self] = &[
        ContactField::FullName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Message,
    ];

    fn key(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Message => "message",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContactField::FullName => "Full name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Company => "Company",
            ContactField::Message => "Message",
        }
    }
}

impl FormValue for ContactRequest {
    type Field = ContactField;

    fn validate(&self) -> FieldErrors<ContactField> {
        use ContactField as F;

        let checks = [
            (F::FullName, rules::NAME.validate_string(&self.full_name, F::FullName.label())),
            (F::Email, rules::EMAIL.validate_string(&self.email, F::Email.label())),
            (F::Phone, rules::PHONE.validate_string(&self.phone, F::Phone.label())),
            (F::Company, rules::COMPANY.validate_string(&self.company, F::Company.label())),
            (F::Message, rules::MESSAGE.validate_string(&self.message, F::Message.label())),
        ];

        checks
            .into_iter()
            .filter_map(|(field, result)| result.err().map(|msg| (field, msg)))
            .collect()
    }
}

/// Строка списка обращений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestSummary {
    pub reference: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: ContactSubject,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_missing_message_short() {
        let req = ContactRequest {
            full_name: String::new(),
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
            message: "hi".to_string(),
            ..ContactRequest::default()
        };
        let errors = req.validate();
        assert!(errors.contains_key(&ContactField::FullName));
        assert!(errors.contains_key(&ContactField::Message));
        assert!(!errors.contains_key(&ContactField::Email));
        assert!(!errors.contains_key(&ContactField::Phone));
        assert!(!errors.contains_key(&ContactField::Company));
    }

    #[test]
    fn test_invalid_email_only() {
        let req = ContactRequest {
            full_name: "Lina".to_string(),
            email: "not-an-email".to_string(),
            phone: "0500000000".to_string(),
            message: "Please call me back about leasing.".to_string(),
            ..ContactRequest::default()
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&ContactField::Email).map(String::as_str),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn test_subject_keys() {
        for subject in ContactSubject::ALL {
            assert_eq!(ContactSubject::from_key(subject.key()), Some(subject));
            let json = serde_json::to_string(&subject).unwrap();
            assert_eq!(json, format!("\"{}\"", subject.key()));
        }
        assert_eq!(ContactSubject::from_key("sales"), None);
    }
}
