use crate::shared::state::FormController;
use crate::shared::submitter::{SiteSubmitter, SubmitMode};
use contracts::shared::form_capture::{FormCapture, FormPhase};
use contracts::usecases::u502_contact_request::{
    ContactField, ContactRequest, ContactSubject, SubmitContactRequest,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: FormController<ContactRequest, SiteSubmitter<SubmitContactRequest>>,
}

impl ContactViewModel {
    /// `subject` preselects the select, e.g. from `?subject=careers`
    pub fn new(subject: Option<ContactSubject>, mode: SubmitMode) -> Self {
        let initial = ContactRequest {
            subject: subject.unwrap_or_default(),
            ..ContactRequest::default()
        };
        Self {
            form: FormController::new(FormCapture::new(initial), SiteSubmitter::for_mode(mode)),
        }
    }

    pub fn error(&self, field: ContactField) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.field_error(field))
    }

    pub fn set_subject(&self, key: &str) {
        if let Some(subject) = ContactSubject::from_key(key) {
            self.form.edit(|f| f.subject = subject);
        }
    }

    pub fn is_done(&self) -> bool {
        self.form.phase() == FormPhase::Submitted
    }

    pub fn start_over_command(&self) {
        self.form.reset_to(ContactRequest::default());
    }
}
