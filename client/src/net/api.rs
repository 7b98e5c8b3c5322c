//! HTTP calls to the chat backend and the same-origin upload proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A non-2xx reply keeps the
//! backend's `detail` text when it sent one so the UI can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, ChatResponse};
#[cfg(feature = "hydrate")]
use super::types::{UploadResponse, parse_error_detail};

/// Backend base URL, fixed at build time from `CHAT_API_URL`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Same-origin upload proxy endpoint.
pub const UPLOAD_PROXY_PATH: &str = "/api/upload";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Errors from backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response, or the body was unreadable.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided `detail` text, if the server sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Unavailable => None,
        }
    }
}

/// Resolve the configured backend base URL without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("CHAT_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(base: &str) -> String {
    format!("{base}/chat")
}

/// Send one chat turn via `POST {base}/chat`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the request fails or the reply cannot
/// be parsed, and [`ApiError::Status`] for non-2xx replies.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&chat_endpoint(api_base_url()))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, detail: parse_error_detail(&body) });
        }
        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Upload one file through the same-origin proxy.
///
/// The multipart payload is built once here; the browser supplies the
/// boundary header.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the form cannot be built or the
/// request fails, and [`ApiError::Status`] for non-2xx replies.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(UPLOAD_FILE_FIELD, file, &file.name())
        .map_err(js_err)?;

    let resp = gloo_net::http::Request::post(UPLOAD_PROXY_PATH)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, detail: parse_error_detail(&body) });
    }
    resp.json::<UploadResponse>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}
