#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::api::ApiError;
use crate::net::types::UploadResponse;

/// Fallback status when a failed upload carries no message at all.
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

/// Metadata of the file picked in the browser. The file handle itself stays
/// with the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Outcome of the last upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Success(String),
    Failed(String),
}

impl UploadStatus {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failed(text) => text,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Upload panel lifecycle: idle, selected, uploading, done.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    pub uploading: bool,
    pub status: Option<UploadStatus>,
}

impl UploadState {
    /// Replace the selection (`None` when the picker came back empty) and
    /// drop any previous status.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
        self.status = None;
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.uploading
    }

    /// Start an upload of the selected file.
    ///
    /// Returns `None` without a selection or while an upload is in flight.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if !self.can_upload() {
            return None;
        }
        self.uploading = true;
        self.status = None;
        self.file.clone()
    }

    /// Apply the upload outcome. `uploading` is released on every branch.
    pub fn finish_upload(&mut self, result: Result<UploadResponse, ApiError>) {
        self.uploading = false;
        match result {
            Ok(resp) => {
                self.file = None;
                self.status = Some(UploadStatus::Success(format!("Successfully uploaded {}", resp.filename)));
            }
            Err(err) => {
                self.status = Some(UploadStatus::Failed(upload_failure_message(&err)));
            }
        }
    }
}

fn upload_failure_message(err: &ApiError) -> String {
    if let Some(detail) = err.detail() {
        return detail.to_owned();
    }
    let message = err.to_string();
    if message.is_empty() { GENERIC_UPLOAD_ERROR.to_owned() } else { message }
}
