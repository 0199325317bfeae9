use crate::domain::a001_job::aggregate::JobId;
use crate::shared::form_capture::{FieldErrors, FormField, FormValue};
use crate::shared::metadata::Attachment;
use crate::usecases::common::rules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Отклик на вакансию
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Vacancy applied to; `None` is an open application
    #[serde(default)]
    pub job_id: Option<JobId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    #[serde(default)]
    pub resume: Option<Attachment>,
}

impl JobApplication {
    pub fn for_job(job_id: JobId) -> Self {
        Self {
            job_id: Some(job_id),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobApplicationField {
    FullName,
    Email,
    Phone,
    CoverLetter,
    Resume,
}

impl FormField for JobApplicationField {
    const ALL: &'static [Self] = &[
        JobApplicationField::FullName,
        JobApplicationField::Email,
        JobApplicationField::Phone,
        JobApplicationField::CoverLetter,
        JobApplicationField::Resume,
    ];

    fn key(&self) -> &'static str {
        match self {
            JobApplicationField::FullName => "fullName",
            JobApplicationField::Email => "email",
            JobApplicationField::Phone => "phone",
            JobApplicationField::CoverLetter => "coverLetter",
            JobApplicationField::Resume => "resume",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            JobApplicationField::FullName => "Full name",
            JobApplicationField::Email => "Email",
            JobApplicationField::Phone => "Phone",
            JobApplicationField::CoverLetter => "Cover letter",
            JobApplicationField::Resume => "Resume",
        }
    }
}

impl FormValue for JobApplication {
    type Field = JobApplicationField;

    fn validate(&self) -> FieldErrors<JobApplicationField> {
        use JobApplicationField as F;

        let checks = [
            (F::FullName, rules::NAME.validate_string(&self.full_name, F::FullName.label())),
            (F::Email, rules::EMAIL.validate_string(&self.email, F::Email.label())),
            (F::Phone, rules::PHONE.validate_string(&self.phone, F::Phone.label())),
            (
                F::CoverLetter,
                rules::MESSAGE.validate_string(&self.cover_letter, F::CoverLetter.label()),
            ),
            (F::Resume, rules::RESUME.validate(self.resume.as_ref(), F::Resume.label())),
        ];

        checks
            .into_iter()
            .filter_map(|(field, result)| result.err().map(|msg| (field, msg)))
            .collect()
    }
}

/// Строка списка откликов (без содержимого резюме)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationSummary {
    pub reference: Uuid,
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume_file_name: Option<String>,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> JobApplication {
        JobApplication {
            job_id: Some(JobId::new("job-001")),
            full_name: "Omar Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: "123".to_string(),
            cover_letter: "Ten years in hospitality management.".to_string(),
            resume: Some(Attachment {
                file_name: "omar-cv.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                size_bytes: 120_000,
                content_base64: String::new(),
            }),
        }
    }

    #[test]
    fn test_valid_application() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_errors_are_per_field() {
        let app = JobApplication {
            full_name: String::new(),
            cover_letter: "hi".to_string(),
            ..valid()
        };
        let errors = app.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(&JobApplicationField::FullName).map(String::as_str),
            Some("Full name is required")
        );
        assert_eq!(
            errors.get(&JobApplicationField::CoverLetter).map(String::as_str),
            Some("Cover letter must be at least 10 characters")
        );
    }

    #[test]
    fn test_resume_required() {
        let app = JobApplication {
            resume: None,
            ..valid()
        };
        let errors = app.validate();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![JobApplicationField::Resume]);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["jobId"], "job-001");
        assert_eq!(json["fullName"], "Omar Haddad");
        assert_eq!(json["resume"]["fileName"], "omar-cv.pdf");
        // field keys match the JSON names used in error bodies
        for field in JobApplicationField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field.key());
        }
    }

    #[test]
    fn test_for_job_is_blank_otherwise() {
        let app = JobApplication::for_job(JobId::new("job-002"));
        assert_eq!(app.job_id, Some(JobId::new("job-002")));
        assert!(app.full_name.is_empty());
    }
}
