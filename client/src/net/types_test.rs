use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_default_is_researcher() {
    assert_eq!(Role::default(), Role::Researcher);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Student).unwrap(), json!("student"));
    assert_eq!(serde_json::to_value(Role::Interview).unwrap(), json!("interview"));
}

#[test]
fn role_from_value_round_trips_every_variant() {
    for role in Role::ALL {
        assert_eq!(Role::from_value(role.as_str()), Some(role));
    }
    assert_eq!(Role::from_value("professor"), None);
}

#[test]
fn role_labels() {
    assert_eq!(Role::Interview.label(), "Interview Prep");
    assert_eq!(Role::Student.label(), "Student");
}

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_without_session_serializes_null() {
    let req = ChatRequest {
        message: "What is the capital of France?".into(),
        session_id: None,
        role: Role::Student,
        top_k: 5,
        similarity_threshold: 0.5,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({
            "message": "What is the capital of France?",
            "session_id": null,
            "role": "student",
            "top_k": 5,
            "similarity_threshold": 0.5
        })
    );
}

// =============================================================
// ChatResponse / Source
// =============================================================

#[test]
fn chat_response_parses_sources_in_order() {
    let body = json!({
        "response": "Attention weighs tokens.",
        "session_id": "s-1",
        "sources": [
            {"document_name": "b.pdf", "score": 0.42, "content": "second"},
            {"document_name": "a.pdf", "score": 0.91, "page_number": 3, "content": "first"}
        ]
    });
    let resp: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.sources.len(), 2);
    assert_eq!(resp.sources[0].document_name, "b.pdf");
    assert_eq!(resp.sources[0].page_number, None);
    assert_eq!(resp.sources[1].page_number, Some(3));
}

#[test]
fn chat_response_missing_sources_defaults_empty() {
    let resp: ChatResponse = serde_json::from_value(json!({"response": "Paris.", "session_id": "abc123"})).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn upload_response_ignores_extra_fields() {
    let resp: UploadResponse =
        serde_json::from_value(json!({"id": "d1", "filename": "paper.pdf", "chunks_count": 9})).unwrap();
    assert_eq!(resp.filename, "paper.pdf");
}

// =============================================================
// parse_error_detail
// =============================================================

#[test]
fn parse_error_detail_reads_string_detail() {
    assert_eq!(parse_error_detail(r#"{"detail":"Session expired"}"#).as_deref(), Some("Session expired"));
}

#[test]
fn parse_error_detail_ignores_non_string_detail() {
    assert_eq!(parse_error_detail(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#), None);
}

#[test]
fn parse_error_detail_ignores_non_json() {
    assert_eq!(parse_error_detail("<html>502</html>"), None);
    assert_eq!(parse_error_detail(r#"{"error":"Proxy error"}"#), None);
}
