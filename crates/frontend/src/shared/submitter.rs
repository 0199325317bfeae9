//! Граница отправки форм: HTTP к backend или имитация для демо-режима

use chrono::Utc;
use contracts::usecases::common::{SubmissionError, SubmissionReceipt, UseCaseError, UseCaseMetadata};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::future::Future;
use std::marker::PhantomData;

use crate::shared::api_utils::api_url;

/// Delivers a validated form value somewhere and reports the outcome
pub trait FormSubmitter<F>: Clone + Send + Sync + 'static {
    fn submit(&self, value: F) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>>;
}

/// POST to the use case endpoint (`/api/forms/{endpoint}`)
pub struct HttpSubmitter<U> {
    path: String,
    _usecase: PhantomData<fn() -> U>,
}

impl<U: UseCaseMetadata> HttpSubmitter<U> {
    pub fn new() -> Self {
        Self {
            path: U::api_path(),
            _usecase: PhantomData,
        }
    }
}

impl<U: UseCaseMetadata> Default for HttpSubmitter<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for HttpSubmitter<U> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _usecase: PhantomData,
        }
    }
}

impl<U, F> FormSubmitter<F> for HttpSubmitter<U>
where
    U: 'static,
    F: Serialize,
{
    async fn submit(&self, value: F) -> Result<SubmissionReceipt, SubmissionError> {
        let response = Request::post(&api_url(&self.path))
            .header("Accept", "application/json")
            .json(&value)
            .map_err(|e| SubmissionError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if response.ok() {
            return response
                .json::<SubmissionReceipt>()
                .await
                .map_err(|e| SubmissionError::Network(format!("Failed to parse response: {}", e)));
        }

        let status = response.status();
        let body = response.json::<UseCaseError>().await.ok();
        log::warn!("{} rejected with HTTP {}", self.path, status);
        Err(SubmissionError::from_response(status, body))
    }
}

/// Accepts everything after a fixed delay, nothing leaves the browser
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl<F> FormSubmitter<F> for SimulatedSubmitter {
    async fn submit(&self, _value: F) -> Result<SubmissionReceipt, SubmissionError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(SubmissionReceipt::new(Utc::now()))
    }
}

/// Which transport the site uses; chosen once at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Http,
    Simulated,
}

impl SubmitMode {
    /// `?demo` in the page URL switches forms to the simulated submitter
    pub fn from_params(params: &std::collections::HashMap<String, String>) -> Self {
        if params.contains_key("demo") {
            SubmitMode::Simulated
        } else {
            SubmitMode::Http
        }
    }
}

/// Either transport behind one type, so views stay non-generic
pub enum SiteSubmitter<U> {
    Http(HttpSubmitter<U>),
    Simulated(SimulatedSubmitter),
}

impl<U: UseCaseMetadata> SiteSubmitter<U> {
    pub fn for_mode(mode: SubmitMode) -> Self {
        match mode {
            SubmitMode::Http => SiteSubmitter::Http(HttpSubmitter::new()),
            SubmitMode::Simulated => SiteSubmitter::Simulated(SimulatedSubmitter::default()),
        }
    }
}

impl<U> Clone for SiteSubmitter<U> {
    fn clone(&self) -> Self {
        match self {
            SiteSubmitter::Http(http) => SiteSubmitter::Http(http.clone()),
            SiteSubmitter::Simulated(sim) => SiteSubmitter::Simulated(*sim),
        }
    }
}

impl<U, F> FormSubmitter<F> for SiteSubmitter<U>
where
    U: 'static,
    F: Serialize,
{
    async fn submit(&self, value: F) -> Result<SubmissionReceipt, SubmissionError> {
        match self {
            SiteSubmitter::Http(http) => http.submit(value).await,
            SiteSubmitter::Simulated(sim) => sim.submit(value).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_contact_request::SubmitContactRequest;
    use std::collections::HashMap;

    #[test]
    fn test_http_submitter_targets_usecase_endpoint() {
        let submitter = HttpSubmitter::<SubmitContactRequest>::new();
        assert_eq!(submitter.path, "/api/forms/contact");
    }

    #[test]
    fn test_submit_mode_from_params() {
        let mut params = HashMap::new();
        assert_eq!(SubmitMode::from_params(&params), SubmitMode::Http);
        params.insert("demo".to_string(), String::new());
        assert_eq!(SubmitMode::from_params(&params), SubmitMode::Simulated);
    }
}
