use super::*;

fn paper() -> SelectedFile {
    SelectedFile { name: "paper.pdf".into(), size: 48_213 }
}

fn selected() -> UploadState {
    let mut state = UploadState::default();
    state.select_file(Some(paper()));
    state
}

// =============================================================
// UploadState defaults
// =============================================================

#[test]
fn upload_state_default_is_idle() {
    let state = UploadState::default();
    assert!(state.file.is_none());
    assert!(!state.uploading);
    assert!(state.status.is_none());
    assert!(!state.can_upload());
}

// =============================================================
// select_file
// =============================================================

#[test]
fn select_file_replaces_selection_and_clears_status() {
    let mut state = selected();
    state.status = Some(UploadStatus::Failed("Upload failed".into()));

    let notes = SelectedFile { name: "notes.txt".into(), size: 10 };
    state.select_file(Some(notes.clone()));

    assert_eq!(state.file, Some(notes));
    assert!(state.status.is_none());
}

#[test]
fn select_nothing_clears_selection() {
    let mut state = selected();
    state.select_file(None);
    assert!(state.file.is_none());
    assert!(!state.can_upload());
}

// =============================================================
// begin_upload
// =============================================================

#[test]
fn begin_upload_without_file_is_no_op() {
    let mut state = UploadState::default();
    assert!(state.begin_upload().is_none());
    assert_eq!(state, UploadState::default());
}

#[test]
fn begin_upload_marks_uploading() {
    let mut state = selected();
    assert_eq!(state.begin_upload(), Some(paper()));
    assert!(state.uploading);
}

#[test]
fn begin_upload_while_uploading_is_no_op() {
    let mut state = selected();
    state.begin_upload().unwrap();
    let before = state.clone();
    assert!(state.begin_upload().is_none());
    assert_eq!(state, before);
}

// =============================================================
// finish_upload
// =============================================================

#[test]
fn success_clears_file_and_reports_filename() {
    let mut state = selected();
    state.begin_upload().unwrap();

    state.finish_upload(Ok(UploadResponse { filename: "paper.pdf".into() }));

    assert!(!state.uploading);
    assert!(state.file.is_none());
    let status = state.status.unwrap();
    assert!(status.is_success());
    assert_eq!(status.text(), "Successfully uploaded paper.pdf");
}

#[test]
fn failure_keeps_file_and_shows_detail() {
    let mut state = selected();
    state.begin_upload().unwrap();

    state.finish_upload(Err(ApiError::Status { status: 400, detail: Some("Unsupported file type".into()) }));

    assert!(!state.uploading);
    assert_eq!(state.file, Some(paper()));
    assert_eq!(state.status, Some(UploadStatus::Failed("Unsupported file type".into())));
    assert!(state.can_upload());
}

#[test]
fn failure_without_detail_shows_transport_message() {
    let mut state = selected();
    state.begin_upload().unwrap();
    state.finish_upload(Err(ApiError::Transport("Failed to fetch".into())));
    assert_eq!(state.status, Some(UploadStatus::Failed("Failed to fetch".into())));
}

#[test]
fn proxy_error_without_detail_shows_status_message() {
    let mut state = selected();
    state.begin_upload().unwrap();
    state.finish_upload(Err(ApiError::Status { status: 500, detail: None }));
    assert_eq!(
        state.status.map(|s| s.text().to_owned()).as_deref(),
        Some("Request failed with status code 500")
    );
}

#[test]
fn empty_transport_message_falls_back_to_generic() {
    let mut state = selected();
    state.begin_upload().unwrap();
    state.finish_upload(Err(ApiError::Transport(String::new())));
    assert_eq!(state.status, Some(UploadStatus::Failed(GENERIC_UPLOAD_ERROR.into())));
}

#[test]
fn retry_after_failure_is_allowed() {
    let mut state = selected();
    state.begin_upload().unwrap();
    state.finish_upload(Err(ApiError::Transport("offline".into())));
    assert_eq!(state.begin_upload(), Some(paper()));
    assert!(state.status.is_none());
}
