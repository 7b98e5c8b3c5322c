//! Wire types shared with the chat backend and the upload proxy.
//!
//! DESIGN
//! ======
//! Request types mirror the backend's JSON schema field-for-field. Response
//! types are permissive: unknown fields are ignored and citation payloads are
//! carried through without validation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Persona sent with each chat request to steer answer style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    #[default]
    Researcher,
    Interview,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Researcher, Role::Interview];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Researcher => "researcher",
            Self::Interview => "interview",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Researcher => "Researcher",
            Self::Interview => "Interview Prep",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

/// Body of `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Serialized as `null` until the backend assigns one.
    pub session_id: Option<String>,
    pub role: Role,
    pub top_k: u32,
    pub similarity_threshold: f64,
}

/// A retrieved document excerpt cited by an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub document_name: String,
    pub score: f64,
    #[serde(default)]
    pub page_number: Option<u32>,
    pub content: String,
}

/// Successful reply from `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub session_id: String,
}

/// Successful reply from the upload proxy; only the filename is read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// Extract a string `detail` field from an error body, if there is one.
#[must_use]
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
