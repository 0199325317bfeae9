use base64::Engine;
use chrono::{DateTime, Utc};
use contracts::domain::a001_job::aggregate::Job;
use contracts::shared::content_store::ContentStore;
use contracts::shared::form_capture::{field_errors_to_wire, FormField, FormValue};
use contracts::shared::metadata::Attachment;
use contracts::usecases::common::{SubmissionReceipt, UseCaseError, UseCaseResult};
use contracts::usecases::u501_job_application::{
    JobApplication, JobApplicationField, JobApplicationSummary,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::repository::{self, NewApplication, StoredResume};
use crate::shared::{config, content};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResumeError {
    #[error("Resume file content is missing")]
    MissingContent,
    #[error("Resume file could not be decoded")]
    Malformed,
    #[error("Resume upload is incomplete ({actual} of {declared} bytes)")]
    SizeMismatch { declared: u64, actual: u64 },
    #[error("Resume must be smaller than {max_mb} MB")]
    TooLarge { max_mb: u64 },
}

/// Decode the uploaded resume and fingerprint it
pub fn decode_resume(attachment: &Attachment, max_bytes: u64) -> Result<StoredResume, ResumeError> {
    if attachment.content_base64.is_empty() {
        return Err(ResumeError::MissingContent);
    }
    let content = base64::engine::general_purpose::STANDARD
        .decode(attachment.content_base64.trim())
        .map_err(|_| ResumeError::Malformed)?;

    let actual = content.len() as u64;
    if actual > max_bytes {
        return Err(ResumeError::TooLarge {
            max_mb: max_bytes / (1024 * 1024),
        });
    }
    if actual != attachment.size_bytes {
        return Err(ResumeError::SizeMismatch {
            declared: attachment.size_bytes,
            actual,
        });
    }

    let sha256 = Sha256::digest(&content)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>();

    Ok(StoredResume {
        file_name: attachment.file_name.clone(),
        mime_type: attachment.mime_type.clone(),
        sha256,
        content,
    })
}

/// Проверка отклика без обращения к БД
pub fn prepare(
    request: &JobApplication,
    jobs: &ContentStore<Job>,
    max_resume_bytes: u64,
    received_at: DateTime<Utc>,
) -> UseCaseResult<NewApplication> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(UseCaseError::validation(field_errors_to_wire(&errors)));
    }

    let job = match &request.job_id {
        Some(id) => Some(
            jobs.require(id)
                .map_err(|e| UseCaseError::not_found(e.to_string()))?,
        ),
        None => None,
    };

    let resume = match &request.resume {
        Some(attachment) => Some(decode_resume(attachment, max_resume_bytes).map_err(|e| {
            let mut fields = BTreeMap::new();
            fields.insert(JobApplicationField::Resume.key().to_string(), e.to_string());
            UseCaseError::validation(fields)
        })?),
        None => None,
    };

    Ok(NewApplication {
        reference: Uuid::new_v4(),
        job_id: job.map(|j| j.id.value().to_string()),
        job_title: job.map(|j| j.title.clone()),
        full_name: request.full_name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        cover_letter: request.cover_letter.trim().to_string(),
        resume,
        received_at,
    })
}

pub async fn submit(request: JobApplication) -> UseCaseResult<SubmissionReceipt> {
    let registry = content::registry()?;
    let received_at = Utc::now();
    let record = prepare(
        &request,
        &registry.jobs,
        config::forms().max_resume_bytes,
        received_at,
    )?;

    let job_title = record.job_title.clone().unwrap_or_else(|| "open application".into());
    let reference = repository::insert(record).await?;
    tracing::info!("Job application {} received for {}", reference, job_title);

    Ok(SubmissionReceipt {
        reference,
        received_at,
    })
}

pub async fn list_recent() -> anyhow::Result<Vec<JobApplicationSummary>> {
    repository::list_recent().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_job::aggregate::JobId;

    fn jobs() -> ContentStore<Job> {
        content::load_content(None).unwrap().jobs
    }

    fn attachment(content: &[u8]) -> Attachment {
        Attachment {
            file_name: "cv.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size_bytes: content.len() as u64,
            content_base64: base64::engine::general_purpose::STANDARD.encode(content),
        }
    }

    fn request(job_id: Option<&str>) -> JobApplication {
        JobApplication {
            job_id: job_id.map(JobId::new),
            full_name: "Omar Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: "+966 50 000 0000".to_string(),
            cover_letter: "Ten years in hospitality management.".to_string(),
            resume: Some(attachment(b"%PDF-1.4 test")),
        }
    }

    #[test]
    fn test_decode_resume_fingerprints_content() {
        let stored = decode_resume(&attachment(b"abc"), 1024).unwrap();
        assert_eq!(stored.content, b"abc");
        assert_eq!(
            stored.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_decode_resume_rejects_bad_uploads() {
        let mut empty = attachment(b"abc");
        empty.content_base64.clear();
        assert_eq!(decode_resume(&empty, 1024), Err(ResumeError::MissingContent));

        let mut garbage = attachment(b"abc");
        garbage.content_base64 = "***".to_string();
        assert_eq!(decode_resume(&garbage, 1024), Err(ResumeError::Malformed));

        let mut lying = attachment(b"abc");
        lying.size_bytes = 10;
        assert_eq!(
            decode_resume(&lying, 1024),
            Err(ResumeError::SizeMismatch { declared: 10, actual: 3 })
        );

        let big = attachment(&vec![0u8; 3 * 1024 * 1024]);
        assert_eq!(
            decode_resume(&big, 2 * 1024 * 1024),
            Err(ResumeError::TooLarge { max_mb: 2 })
        );
    }

    #[test]
    fn test_prepare_resolves_job_title() {
        let jobs = jobs();
        let job = jobs.all()[0].clone();
        let record = prepare(&request(Some(job.id.value())), &jobs, 1024, Utc::now()).unwrap();
        assert_eq!(record.job_title, Some(job.title));
        assert!(record.resume.is_some());
    }

    #[test]
    fn test_prepare_open_application() {
        let record = prepare(&request(None), &jobs(), 1024, Utc::now()).unwrap();
        assert_eq!(record.job_id, None);
        assert_eq!(record.job_title, None);
    }

    #[test]
    fn test_prepare_unknown_job() {
        let err = prepare(&request(Some("job-999")), &jobs(), 1024, Utc::now()).unwrap_err();
        assert_eq!(err.code, UseCaseError::NOT_FOUND);
    }

    #[test]
    fn test_prepare_reports_field_errors() {
        let mut req = request(None);
        req.email = "not-an-email".to_string();
        req.resume = None;
        let err = prepare(&req, &jobs(), 1024, Utc::now()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.errors.contains_key("email"));
        assert!(err.errors.contains_key("resume"));
    }

    #[test]
    fn test_prepare_maps_resume_decode_error_to_field() {
        let mut req = request(None);
        if let Some(resume) = req.resume.as_mut() {
            resume.content_base64.clear();
        }
        let err = prepare(&req, &jobs(), 1024, Utc::now()).unwrap_err();
        assert_eq!(
            err.errors.get("resume").map(String::as_str),
            Some("Resume file content is missing")
        );
    }
}
