//! HTTP helpers for the widget's two JSON endpoints, with a consistent abort
//! timeout and error mapping. The verify call sends JSON and ignores the
//! response body; the password call decodes one. Neither helper attaches
//! credentials, and neither logs request or response bodies.

#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};
#[cfg(target_arch = "wasm32")]
use web_sys::AbortController;

/// Request timeout (milliseconds) applied to both helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters kept for logging.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON to a widget endpoint and discards the response body on success.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

/// Fetches JSON from a widget endpoint.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("failed to decode response: {err}")))
    } else {
        Err(status_error(response).await)
    }
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sends a request with an abort timeout so a hung transport cannot wedge
/// the submit flow.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Network("failed to initialize request timeout".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Maps transport failures, distinguishing timeouts from everything else.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("request timed out".to_string())
    } else {
        AppError::Network(format!("unable to reach the server: {message}"))
    }
}

/// Converts a non-success response into an [`AppError::Http`] with a
/// sanitized body.
#[cfg(target_arch = "wasm32")]
async fn status_error(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Trims and truncates HTTP error bodies before they reach the log sink.
pub fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
