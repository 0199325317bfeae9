//! Binds a `FormCapture` state machine to a signal and a submitter.
//!
//! The submit call and the timeout race: whichever reaches the machine first
//! wins, the other one is rejected by the ticket check.

use chrono::Utc;
use contracts::shared::form_capture::{FormCapture, FormError, FormPhase, FormValue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::submitter::FormSubmitter;

/// Slack so the timer never fires just before the deadline
const TIMEOUT_SLACK_MS: u32 = 50;

pub struct FormController<F, S>
where
    F: FormValue + Send + Sync + 'static,
    F::Field: Send + Sync,
    S: FormSubmitter<F>,
{
    pub capture: RwSignal<FormCapture<F>>,
    submitter: StoredValue<S>,
}

impl<F, S> Clone for FormController<F, S>
where
    F: FormValue + Send + Sync + 'static,
    F::Field: Send + Sync,
    S: FormSubmitter<F>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, S> Copy for FormController<F, S>
where
    F: FormValue + Send + Sync + 'static,
    F::Field: Send + Sync,
    S: FormSubmitter<F>,
{
}

impl<F, S> FormController<F, S>
where
    F: FormValue + Send + Sync + 'static,
    F::Field: Send + Sync,
    S: FormSubmitter<F>,
{
    pub fn new(capture: FormCapture<F>, submitter: S) -> Self {
        Self {
            capture: RwSignal::new(capture),
            submitter: StoredValue::new(submitter),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.capture.with(|c| c.phase())
    }

    pub fn is_submitting(&self) -> bool {
        self.capture.with(|c| c.is_submitting())
    }

    pub fn field_error(&self, field: F::Field) -> Option<String> {
        self.capture.with(|c| c.field_error(field).map(str::to_string))
    }

    pub fn can_submit(&self) -> bool {
        self.capture.with(|c| c.can_submit())
    }

    /// Message of the last failed attempt (timeout, network, server)
    pub fn last_error(&self) -> Option<String> {
        self.capture.with(|c| c.last_error().map(|e| e.to_string()))
    }

    pub fn receipt_reference(&self) -> Option<String> {
        self.capture.with(|c| c.last_receipt().map(|r| r.short_reference()))
    }

    /// Read a value out of the current form value
    pub fn read<T>(&self, f: impl Fn(&F) -> T) -> T {
        self.capture.with(|c| f(c.value()))
    }

    /// Field change from an input handler; ignored while submitting
    pub fn edit(&self, change: impl FnOnce(&mut F)) {
        let result = self
            .capture
            .try_update(|c| c.edit(change))
            .unwrap_or(Err(FormError::Busy));
        if let Err(e) = result {
            log::debug!("edit ignored: {}", e);
        }
    }

    /// Validate and submit; a second call while in flight is a no-op
    pub fn submit(&self) {
        let started = self.capture.try_update(|c| {
            let submission = c.begin_submit(Utc::now())?;
            Ok::<_, FormError>((submission, c.timeout()))
        });
        let (submission, timeout) = match started {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                log::debug!("submit not started: {}", e);
                return;
            }
            None => return,
        };

        let capture = self.capture;
        let ticket = submission.ticket;
        let submitter = self.submitter.get_value();
        spawn_local(async move {
            let result = submitter.submit(submission.value).await;
            capture.try_update(|c| match c.complete(ticket, result) {
                Ok(phase) => log::info!("submission finished: {:?}", phase),
                Err(e) => log::warn!("submission result dropped: {}", e),
            });
        });

        let timeout_ms = timeout.num_milliseconds().max(0) as u32 + TIMEOUT_SLACK_MS;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            capture.try_update(|c| {
                if let Some(err) = c.check_timeout(Utc::now()) {
                    log::warn!("submission timed out: {}", err);
                }
            });
        });
    }

    /// Start over with a prefilled value
    pub fn reset_to(&self, initial: F) {
        self.capture.update(|c| c.reset_to(initial));
    }
}
