use super::model;
use crate::shared::state::FormController;
use crate::shared::submitter::{SiteSubmitter, SubmitMode};
use contracts::domain::a001_job::aggregate::JobId;
use contracts::shared::form_capture::{FormCapture, FormPhase};
use contracts::usecases::u501_job_application::{
    JobApplication, JobApplicationField, SubmitJobApplication,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub type JobApplicationController =
    FormController<JobApplication, SiteSubmitter<SubmitJobApplication>>;

/// ViewModel for the application form
#[derive(Clone, Copy)]
pub struct JobApplicationViewModel {
    pub form: JobApplicationController,
    job_id: StoredValue<Option<JobId>>,
    /// The resume is being read from disk
    pub reading_file: RwSignal<bool>,
    pub file_error: RwSignal<Option<String>>,
}

impl JobApplicationViewModel {
    pub fn new(job_id: Option<JobId>, mode: SubmitMode) -> Self {
        let initial = Self::initial_value(job_id.clone());
        Self {
            form: FormController::new(FormCapture::new(initial), SiteSubmitter::for_mode(mode)),
            job_id: StoredValue::new(job_id),
            reading_file: RwSignal::new(false),
            file_error: RwSignal::new(None),
        }
    }

    fn initial_value(job_id: Option<JobId>) -> JobApplication {
        match job_id {
            Some(id) => JobApplication::for_job(id),
            None => JobApplication::default(),
        }
    }

    pub fn error(&self, field: JobApplicationField) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.field_error(field))
    }

    pub fn resume_name(&self) -> Option<String> {
        self.form.read(|f| f.resume.as_ref().map(|r| r.file_name.clone()))
    }

    pub fn submit_disabled(&self) -> bool {
        self.form.is_submitting() || self.reading_file.get()
    }

    /// Resume picked in the file input; `None` clears it
    pub fn attach_command(&self, file: Option<web_sys::File>) {
        let form = self.form;
        let reading = self.reading_file;
        let file_error = self.file_error;
        file_error.set(None);

        let Some(file) = file else {
            form.edit(|f| f.resume = None);
            return;
        };

        reading.set(true);
        spawn_local(async move {
            match model::read_attachment(file).await {
                Ok(attachment) => {
                    log::debug!(
                        "resume {} ({} bytes) attached",
                        attachment.file_name,
                        attachment.size_bytes
                    );
                    form.edit(|f| f.resume = Some(attachment));
                }
                Err(e) => {
                    log::error!("{}", e);
                    file_error.set(Some(e));
                }
            }
            reading.set(false);
        });
    }

    pub fn submit_command(&self) {
        if self.reading_file.get_untracked() {
            return;
        }
        self.form.submit();
    }

    /// After success or on "apply again": empty form for the same vacancy
    pub fn start_over_command(&self) {
        self.file_error.set(None);
        self.form.reset_to(Self::initial_value(self.job_id.get_value()));
    }

    pub fn is_done(&self) -> bool {
        self.form.phase() == FormPhase::Submitted
    }
}
