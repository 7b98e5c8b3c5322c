//! Ingestion backend client used by the upload proxy.
//!
//! Thin HTTP wrapper that re-sends a browser upload to the backend `/upload`
//! endpoint as a fresh multipart body. The backend's status and JSON body are
//! handed back untouched; `parse_reply_body` is pure for testability.

use axum::http::StatusCode;
use reqwest::multipart::{Form, Part};

/// Multipart field name for the uploaded file, on both sides of the proxy.
pub const FILE_FIELD: &str = "file";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while proxying an upload.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The browser's multipart body could not be parsed.
    #[error("form parse failed: {0}")]
    FormParse(String),

    /// The multipart body had no `file` part.
    #[error("no file uploaded")]
    MissingFile,

    /// The request to the ingestion backend failed in transport.
    #[error("backend request failed: {0}")]
    BackendRequest(String),

    /// The ingestion backend replied with a body that is not JSON.
    #[error("backend body parse failed: {0}")]
    BackendBody(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    /// HTTP status returned to the browser for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::FormParse(_) | Self::BackendRequest(_) | Self::BackendBody(_) | Self::HttpClientBuild(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Generic JSON payload returned to the browser. Details stay in the logs.
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        let message = match self {
            Self::FormParse(_) => "Error parsing form",
            Self::MissingFile => "No file uploaded",
            Self::BackendRequest(_) | Self::BackendBody(_) | Self::HttpClientBuild(_) => "Proxy error",
        };
        serde_json::json!({ "error": message })
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// A file extracted from the browser's multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// What the ingestion backend answered.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: serde_json::Value,
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct IngestClient {
    http: reqwest::Client,
    upload_url: String,
}

impl IngestClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(upload_url: impl Into<String>) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upload_url: upload_url.into() })
    }

    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// POST `file` to the backend as a new multipart body and return its reply.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::BackendRequest`] on transport failure and
    /// [`ProxyError::BackendBody`] when the reply is not JSON. Non-2xx replies
    /// are not errors; they are relayed.
    pub async fn forward(&self, file: UploadedFile) -> Result<BackendReply, ProxyError> {
        let file_name = file.file_name.clone();
        let size = file.bytes.len();
        let form = build_form(file)?;

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProxyError::BackendRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProxyError::BackendRequest(e.to_string()))?;

        tracing::info!(file = %file_name, bytes = size, status, "upload forwarded to backend");
        let body = parse_reply_body(&text)?;
        Ok(BackendReply { status, body })
    }
}

fn build_form(file: UploadedFile) -> Result<Form, ProxyError> {
    let part = Part::bytes(file.bytes).file_name(file.file_name);
    let part = match file.content_type.as_deref() {
        Some(mime) => part
            .mime_str(mime)
            .map_err(|e| ProxyError::BackendRequest(e.to_string()))?,
        None => part,
    };
    Ok(Form::new().part(FILE_FIELD, part))
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_reply_body(text: &str) -> Result<serde_json::Value, ProxyError> {
    serde_json::from_str(text).map_err(|e| ProxyError::BackendBody(e.to_string()))
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
