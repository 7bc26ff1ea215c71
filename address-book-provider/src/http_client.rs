//! Generic HTTP client tools
//!
//! Shared request handling for sources: sending, logging and reading the body.
//! Each source still builds its own `RequestBuilder` and decides how to
//! interpret the body.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::types::SourceOptions;
use crate::utils::log_sanitizer::body_preview;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Build a client honoring the optional timeouts in `options`.
    pub fn build_client(options: &SourceOptions, provider_name: &str) -> Result<Client, SourceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(|e| SourceError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
    }

    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Any status is accepted here; a non-success status is only logged.
    /// Transport failures, timeouts included, become
    /// [`SourceError::NetworkError`].
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), SourceError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("Request timed out: {e}")
            } else {
                e.to_string()
            };
            SourceError::NetworkError {
                provider: provider_name.to_string(),
                detail,
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {}", status.as_u16());
        if !status.is_success() {
            log::warn!("[{provider_name}] {method_name} {url} returned HTTP {status}");
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| SourceError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            body_preview(&response_text)
        );

        Ok((status.as_u16(), response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, SourceError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                body_preview(response_text)
            );
            SourceError::DecodeError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Convert a seconds setting into a timeout, treating zero as "no timeout".
pub fn timeout_from_secs(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|s| *s > 0).map(Duration::from_secs)
}
