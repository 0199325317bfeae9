//! API utilities for frontend-backend communication
//!
//! The backend runs on port 3000 of the host that served the page.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document from the backend
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
