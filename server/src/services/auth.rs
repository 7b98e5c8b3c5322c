//! Authentication capability consulted at session entry.
//!
//! DESIGN
//! ======
//! Sign-in is not implemented. Entry routes ask an `Authenticator` whether
//! the request is admitted and redirect accordingly; `NoAuth` admits every
//! request, so `/` and `/login` always land on the chat page. A real
//! implementation plugs in through `AppState::with_auth`.

use axum::http::HeaderMap;

/// Path of the chat page.
pub const CHAT_ROUTE: &str = "/chat";
/// Path of the sign-in entry point.
pub const LOGIN_ROUTE: &str = "/login";

/// Identity attached to an admitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { name: "anonymous".to_owned() }
    }
}

/// Reason a request was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no credentials presented")]
    MissingCredentials,
    #[error("credentials rejected: {0}")]
    Rejected(String),
}

/// Decides whether an incoming request is admitted.
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the request is not admitted.
    fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError>;
}

/// Pass-through authenticator: every request is admitted anonymously.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn authenticate(&self, _headers: &HeaderMap) -> Result<Identity, AuthError> {
        Ok(Identity::anonymous())
    }
}

/// Where a request arriving at an entry point should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDecision {
    /// Admitted: continue to the chat page.
    Chat,
    /// Not admitted: sign-in is required.
    SignIn,
}

impl EntryDecision {
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Chat => CHAT_ROUTE,
            Self::SignIn => LOGIN_ROUTE,
        }
    }
}

/// Evaluate the entry decision for one request.
pub fn decide_entry(auth: &dyn Authenticator, headers: &HeaderMap) -> EntryDecision {
    match auth.authenticate(headers) {
        Ok(identity) => {
            tracing::debug!(user = %identity.name, "entry admitted");
            EntryDecision::Chat
        }
        Err(e) => {
            tracing::debug!(error = %e, "entry requires sign-in");
            EntryDecision::SignIn
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
