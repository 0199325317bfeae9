//! Form Capture: validate-then-submit state machine behind the job
//! application and contact forms.
//!
//! ```text
//! Empty ─edit→ Editing ─begin_submit→ (Validating) ─┬→ Invalid ─edit→ Editing
//!                                                   └→ Submitting ─┬→ Submitted ─edit→ Editing
//!                                                                  └→ SubmitError ─edit/retry→ ...
//! ```
//!
//! The machine is synchronous and clock-free: callers pass `now`, and the
//! async transport reports back through `complete` with the ticket it was
//! given. At most one submission is in flight per form.

use crate::usecases::common::{SubmissionError, SubmissionReceipt};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Default time a submission may stay in flight
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: i64 = 15;

/// A form field that can carry a validation error
pub trait FormField: Copy + Ord + Debug + 'static {
    const ALL: &'static [Self];

    /// Wire key (JSON field name in error bodies)
    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

pub type FieldErrors<K> = BTreeMap<K, String>;

/// Field errors keyed by wire key, for error bodies
pub fn field_errors_to_wire<K: FormField>(errors: &FieldErrors<K>) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|(k, v)| (k.key().to_string(), v.clone()))
        .collect()
}

/// Value captured by a form
pub trait FormValue: Clone + Default + PartialEq {
    type Field: FormField;

    /// Validate every field independently; an empty map means valid
    fn validate(&self) -> FieldErrors<Self::Field>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Empty,
    Editing,
    Validating,
    Invalid,
    Submitting,
    Submitted,
    SubmitError,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{count} field(s) need attention")]
    Invalid { count: usize },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("the form cannot be edited while it is being submitted")]
    Busy,
    #[error("no submission is in progress")]
    NotSubmitting,
    #[error("the submission result arrived for an outdated attempt")]
    StaleTicket,
}

/// Identifies one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    seq: u64,
    started_at: DateTime<Utc>,
}

impl SubmissionTicket {
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// What the transport needs to send
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub ticket: SubmissionTicket,
    pub value: F,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormCapture<F: FormValue> {
    value: F,
    phase: FormPhase,
    errors: FieldErrors<F::Field>,
    in_flight: Option<SubmissionTicket>,
    next_seq: u64,
    timeout: Duration,
    last_error: Option<SubmissionError>,
    last_receipt: Option<SubmissionReceipt>,
}

impl<F: FormValue> Default for FormCapture<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: FormValue> FormCapture<F> {
    /// Start with a prefilled value (e.g. job id of the selected vacancy).
    /// The form is still `Empty` until the visitor edits it.
    pub fn new(initial: F) -> Self {
        Self {
            value: initial,
            phase: FormPhase::Empty,
            errors: BTreeMap::new(),
            in_flight: None,
            next_seq: 1,
            timeout: Duration::seconds(DEFAULT_SUBMIT_TIMEOUT_SECS),
            last_error: None,
            last_receipt: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn value(&self) -> &F {
        &self.value
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors<F::Field> {
        &self.errors
    }

    pub fn field_error(&self, field: F::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Submit control state: disabled while a submission is in flight
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Apply a field change.
    ///
    /// The error of an edited field stays visible until the next submit
    /// attempt; other fields keep theirs too.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        change(&mut self.value);
        self.phase = FormPhase::Editing;
        Ok(())
    }

    /// Validate and, when valid, move to `Submitting`.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<Submission<F>, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        self.phase = FormPhase::Validating;
        self.errors = self.value.validate();
        if !self.errors.is_empty() {
            self.phase = FormPhase::Invalid;
            return Err(FormError::Invalid {
                count: self.errors.len(),
            });
        }

        let ticket = SubmissionTicket {
            seq: self.next_seq,
            started_at: now,
        };
        self.next_seq += 1;
        self.in_flight = Some(ticket);
        self.last_error = None;
        self.phase = FormPhase::Submitting;

        Ok(Submission {
            ticket,
            value: self.value.clone(),
        })
    }

    /// Report the transport result for `ticket`.
    ///
    /// Success clears the form; failure keeps every entered value. Server-side
    /// field errors are mapped back onto the fields and the form becomes
    /// `Invalid`.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<SubmissionReceipt, SubmissionError>,
    ) -> Result<FormPhase, FormError> {
        match self.in_flight {
            Some(current) if current == ticket => {}
            // выдан раньше: перекрыт повтором, таймаутом или отменой
            _ if ticket.seq < self.next_seq => return Err(FormError::StaleTicket),
            _ => return Err(FormError::NotSubmitting),
        }
        self.in_flight = None;

        match result {
            Ok(receipt) => {
                self.value = F::default();
                self.errors.clear();
                self.last_error = None;
                self.last_receipt = Some(receipt);
                self.phase = FormPhase::Submitted;
            }
            Err(SubmissionError::Invalid { fields }) => {
                self.errors = fields
                    .iter()
                    .filter_map(|(k, v)| F::Field::from_key(k).map(|f| (f, v.clone())))
                    .collect();
                let err = SubmissionError::Invalid { fields };
                self.phase = if self.errors.is_empty() {
                    // the server named fields this form does not know
                    FormPhase::SubmitError
                } else {
                    FormPhase::Invalid
                };
                self.last_error = Some(err);
            }
            Err(err) => {
                self.last_error = Some(err);
                self.phase = FormPhase::SubmitError;
            }
        }
        Ok(self.phase)
    }

    /// Fail the in-flight submission if it has exceeded the timeout.
    /// A result that arrives later is rejected as stale.
    pub fn check_timeout(&mut self, now: DateTime<Utc>) -> Option<&SubmissionError> {
        let ticket = self.in_flight?;
        if now - ticket.started_at < self.timeout {
            return None;
        }
        self.in_flight = None;
        self.phase = FormPhase::SubmitError;
        self.last_error = Some(SubmissionError::Timeout {
            seconds: self.timeout.num_seconds(),
        });
        self.last_error.as_ref()
    }

    /// Explicit cancel: drop values, errors and any in-flight attempt
    pub fn cancel(&mut self) {
        self.reset_to(F::default());
    }

    /// Reset to `Empty` with a new initial value
    pub fn reset_to(&mut self, initial: F) {
        self.value = initial;
        self.phase = FormPhase::Empty;
        self.errors.clear();
        self.in_flight = None;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_contact_request::{ContactField, ContactRequest};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn filled(form: &mut FormCapture<ContactRequest>) {
        form.edit(|f| {
            f.full_name = "Sara Al-Harbi".into();
            f.email = "sara@example.com".into();
            f.phone = "+966 50 000 0000".into();
            f.message = "I would like to discuss a partnership.".into();
        })
        .unwrap();
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt::new(now())
    }

    #[test]
    fn test_starts_empty_then_editing() {
        let mut form = FormCapture::<ContactRequest>::default();
        assert_eq!(form.phase(), FormPhase::Empty);
        form.edit(|f| f.full_name = "Sara".into()).unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_invalid_email_only_flags_email() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        form.edit(|f| f.email = "not-an-email".into()).unwrap();

        let err = form.begin_submit(now()).unwrap_err();
        assert_eq!(err, FormError::Invalid { count: 1 });
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert!(form.field_error(ContactField::Email).is_some());
        assert!(form.field_error(ContactField::FullName).is_none());
        assert!(form.field_error(ContactField::Phone).is_none());
        assert!(form.field_error(ContactField::Message).is_none());
        // values are kept
        assert_eq!(form.value().email, "not-an-email");

        form.edit(|f| f.email = "sara@example.com".into()).unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_double_submit_is_guarded() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        let first = form.begin_submit(now()).unwrap();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(now()), Err(FormError::AlreadySubmitting));
        assert_eq!(form.edit(|f| f.phone.clear()), Err(FormError::Busy));
        assert_eq!(form.complete(first.ticket, Ok(receipt())), Ok(FormPhase::Submitted));
    }

    #[test]
    fn test_success_resets_value() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        let sub = form.begin_submit(now()).unwrap();
        assert_eq!(sub.value.full_name, "Sara Al-Harbi");
        form.complete(sub.ticket, Ok(receipt())).unwrap();
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.value(), &ContactRequest::default());
        assert!(form.last_receipt().is_some());
        assert!(form.can_submit());
    }

    #[test]
    fn test_failure_preserves_value_and_allows_retry() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        let sub = form.begin_submit(now()).unwrap();
        form.complete(sub.ticket, Err(SubmissionError::Network("offline".into())))
            .unwrap();
        assert_eq!(form.phase(), FormPhase::SubmitError);
        assert_eq!(form.value().full_name, "Sara Al-Harbi");
        assert_eq!(
            form.last_error(),
            Some(&SubmissionError::Network("offline".into()))
        );

        let retry = form.begin_submit(now()).unwrap();
        assert_ne!(retry.ticket, sub.ticket);
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_timeout_then_late_result_is_stale() {
        let mut form = FormCapture::<ContactRequest>::default().with_timeout(Duration::seconds(5));
        filled(&mut form);
        let sub = form.begin_submit(now()).unwrap();

        assert!(form.check_timeout(now() + Duration::seconds(4)).is_none());
        assert_eq!(form.phase(), FormPhase::Submitting);

        let err = form.check_timeout(now() + Duration::seconds(5)).cloned();
        assert_eq!(err, Some(SubmissionError::Timeout { seconds: 5 }));
        assert_eq!(form.phase(), FormPhase::SubmitError);
        assert_eq!(form.value().full_name, "Sara Al-Harbi");

        assert_eq!(
            form.complete(sub.ticket, Ok(receipt())),
            Err(FormError::StaleTicket)
        );
        // the late result changes nothing
        assert_eq!(form.phase(), FormPhase::SubmitError);
        assert_eq!(
            form.last_error(),
            Some(&SubmissionError::Timeout { seconds: 5 })
        );
        assert!(form.last_receipt().is_none());
    }

    #[test]
    fn test_stale_ticket_after_retry() {
        let mut form = FormCapture::<ContactRequest>::default().with_timeout(Duration::seconds(5));
        filled(&mut form);
        let first = form.begin_submit(now()).unwrap();
        form.check_timeout(now() + Duration::seconds(10));
        let second = form.begin_submit(now() + Duration::seconds(11)).unwrap();

        assert_eq!(form.complete(first.ticket, Ok(receipt())), Err(FormError::StaleTicket));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.complete(second.ticket, Ok(receipt())), Ok(FormPhase::Submitted));
    }

    #[test]
    fn test_server_field_errors_map_back() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        let sub = form.begin_submit(now()).unwrap();
        let mut fields = BTreeMap::new();
        fields.insert("email".to_string(), "Mailbox does not exist".to_string());
        form.complete(sub.ticket, Err(SubmissionError::Invalid { fields }))
            .unwrap();
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.field_error(ContactField::Email), Some("Mailbox does not exist"));
    }

    #[test]
    fn test_cancel_resets() {
        let mut form = FormCapture::<ContactRequest>::default();
        filled(&mut form);
        let sub = form.begin_submit(now()).unwrap();
        form.cancel();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert_eq!(form.value(), &ContactRequest::default());
        assert_eq!(form.complete(sub.ticket, Ok(receipt())), Err(FormError::StaleTicket));
        assert_eq!(form.phase(), FormPhase::Empty);
    }

    #[test]
    fn test_ticket_from_another_form_is_not_submitting() {
        let mut a = FormCapture::<ContactRequest>::default();
        let mut b = FormCapture::<ContactRequest>::default();
        filled(&mut b);
        let from_b = b.begin_submit(now()).unwrap();
        assert_eq!(a.complete(from_b.ticket, Ok(receipt())), Err(FormError::NotSubmitting));
    }

    #[test]
    fn test_field_errors_to_wire() {
        let mut errors = FieldErrors::new();
        errors.insert(ContactField::Email, "bad".to_string());
        let wire = field_errors_to_wire(&errors);
        assert_eq!(wire.get("email").map(String::as_str), Some("bad"));
    }
}
