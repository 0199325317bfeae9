use chrono::Utc;
use contracts::shared::form_capture::{field_errors_to_wire, FormValue};
use contracts::usecases::common::{SubmissionReceipt, UseCaseError, UseCaseResult};
use contracts::usecases::u502_contact_request::{ContactRequest, ContactRequestSummary};

use super::repository;

/// Проверка и нормализация обращения без обращения к БД
pub fn prepare(request: &ContactRequest) -> UseCaseResult<ContactRequest> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err(UseCaseError::validation(field_errors_to_wire(&errors)));
    }

    Ok(ContactRequest {
        full_name: request.full_name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        company: request.company.trim().to_string(),
        subject: request.subject,
        message: request.message.trim().to_string(),
    })
}

pub async fn submit(request: ContactRequest) -> UseCaseResult<SubmissionReceipt> {
    let record = prepare(&request)?;

    let receipt = SubmissionReceipt::new(Utc::now());
    repository::insert(receipt.reference, &record, receipt.received_at).await?;
    tracing::info!(
        "Contact request {} received ({})",
        receipt.reference,
        record.subject.label()
    );
    Ok(receipt)
}

pub async fn list_recent() -> anyhow::Result<Vec<ContactRequestSummary>> {
    repository::list_recent().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_contact_request::ContactSubject;

    fn request() -> ContactRequest {
        ContactRequest {
            full_name: "Lina Saleh".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+966 55 123 4567".to_string(),
            company: String::new(),
            subject: ContactSubject::Leasing,
            message: "Interested in a unit at the Khobar mall.".to_string(),
        }
    }

    #[test]
    fn test_prepare_accepts_valid_request() {
        assert_eq!(prepare(&request()).unwrap(), request());
    }

    #[test]
    fn test_prepare_trims_every_field() {
        let padded = ContactRequest {
            full_name: "  Lina Saleh ".to_string(),
            email: " lina@example.com\t".to_string(),
            phone: " +966 55 123 4567 ".to_string(),
            company: "  Al Noor Trading  ".to_string(),
            message: "\n Interested in a unit at the Khobar mall. \n".to_string(),
            ..request()
        };
        let record = prepare(&padded).unwrap();
        assert_eq!(record.full_name, "Lina Saleh");
        assert_eq!(record.email, "lina@example.com");
        assert_eq!(record.phone, "+966 55 123 4567");
        assert_eq!(record.company, "Al Noor Trading");
        assert_eq!(record.message, "Interested in a unit at the Khobar mall.");
    }

    #[test]
    fn test_prepare_returns_wire_keys() {
        let err = prepare(&ContactRequest::default()).unwrap_err();
        assert!(err.is_validation());
        let keys: Vec<&str> = err.errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["email", "fullName", "message", "phone"]);
    }
}
