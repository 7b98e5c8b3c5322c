//! Upload proxy: `/api/upload` re-sends browser uploads to the ingestion backend.
//!
//! The browser posts a multipart body with a `file` part. The first such part
//! carrying a filename is forwarded as a new multipart body; the backend's
//! status code and JSON body go back to the browser unchanged. Proxy-side
//! failures collapse to a generic JSON error; details go to the log.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::ingest::{BackendReply, FILE_FIELD, ProxyError, UploadedFile};
use crate::state::AppState;

/// `POST /api/upload`: forward the uploaded file and relay the reply.
pub async fn upload_proxy(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> Response {
    match proxy_upload(&state, multipart).await {
        Ok(reply) => relay_reply(reply),
        Err(err) => proxy_error_response(&err),
    }
}

/// Any other method on `/api/upload`.
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, Json(serde_json::json!({ "message": "Method not allowed" }))).into_response()
}

async fn proxy_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<BackendReply, ProxyError> {
    let mut multipart = multipart.map_err(|e| ProxyError::FormParse(e.to_string()))?;
    let file = first_file(&mut multipart).await?;
    state.ingest.forward(file).await
}

async fn first_file(multipart: &mut Multipart) -> Result<UploadedFile, ProxyError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProxyError::FormParse(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A `file` part without a filename is a plain form value, not a file.
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ProxyError::FormParse(e.to_string()))?;
        return Ok(UploadedFile { file_name, content_type, bytes: bytes.to_vec() });
    }
    Err(ProxyError::MissingFile)
}

fn relay_reply(reply: BackendReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(reply.body)).into_response()
}

fn proxy_error_response(err: &ProxyError) -> Response {
    match err {
        ProxyError::MissingFile => tracing::warn!("upload rejected: no file part"),
        ProxyError::FormParse(e) => tracing::warn!(error = %e, "upload form parse failed"),
        other => tracing::error!(error = %other, "upload proxy failed"),
    }
    (err.status(), Json(err.payload())).into_response()
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
