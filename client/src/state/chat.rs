#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatRequest, ChatResponse, Role, Source};

/// Number of excerpts the backend retrieves per question.
pub const DEFAULT_TOP_K: u32 = 5;
/// Minimum similarity score for a retrieved excerpt.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;
/// Error shown when the backend gives no `detail`.
pub const GENERIC_CHAT_ERROR: &str = "An error occurred. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single conversation entry. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    /// Citations; only assistant messages carry them.
    pub sources: Option<Vec<Source>>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// Conversation state owned by the chat page.
///
/// `is_loading` is the single-flight gate: while it is set, `begin_send`
/// refuses to start another request. Input edits stay allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub input: String,
    pub is_loading: bool,
    /// Opaque backend token; echoed on every request once set.
    pub session_id: Option<String>,
    pub role: Role,
    pub error: Option<String>,
    last_id: u64,
}

impl ChatState {
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Applies to the next send only; past messages keep their wording.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// Start a chat turn from the current input.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a request
    /// is in flight. Otherwise appends the user message, clears the input and
    /// error, sets loading, and returns the request to send.
    pub fn begin_send(&mut self, now_ms: f64) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        let id = self.next_id(now_ms);
        self.messages.push(Message {
            id,
            role: MessageRole::User,
            content: text.clone(),
            sources: None,
            timestamp: now_ms,
        });
        self.is_loading = true;
        self.error = None;

        Some(ChatRequest {
            message: text,
            session_id: self.session_id.clone(),
            role: self.role,
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        })
    }

    /// Apply the outcome of the request returned by `begin_send`.
    ///
    /// The optimistic user message is kept on failure.
    pub fn finish_send(&mut self, result: Result<ChatResponse, ApiError>, now_ms: f64) {
        if !self.is_loading {
            return;
        }
        self.is_loading = false;

        match result {
            Ok(resp) => {
                let id = self.next_id(now_ms);
                self.messages.push(Message {
                    id,
                    role: MessageRole::Assistant,
                    content: resp.response,
                    sources: Some(resp.sources),
                    timestamp: now_ms,
                });
                self.session_id = Some(resp.session_id);
            }
            Err(err) => {
                self.error = Some(
                    err.detail()
                        .map_or_else(|| GENERIC_CHAT_ERROR.to_owned(), str::to_owned),
                );
            }
        }
    }

    /// Timestamp-derived id, bumped past the previous one so ids stay unique.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_id(&mut self, now_ms: f64) -> String {
        let candidate = now_ms.max(0.0) as u64;
        self.last_id = candidate.max(self.last_id + 1);
        self.last_id.to_string()
    }
}
