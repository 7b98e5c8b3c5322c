//! Entry routes: `/` and `/login` decide once where the session goes.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};

use crate::services::auth::{CHAT_ROUTE, EntryDecision, decide_entry};
use crate::state::AppState;

/// `GET /`: redirect to the chat page, or to sign-in when not admitted.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    Redirect::temporary(decide_entry(state.auth.as_ref(), &headers).route())
}

/// `GET /login`: admitted sessions go straight to chat.
pub async fn login(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match decide_entry(state.auth.as_ref(), &headers) {
        EntryDecision::Chat => Redirect::temporary(CHAT_ROUTE).into_response(),
        EntryDecision::SignIn => (StatusCode::UNAUTHORIZED, "Sign-in required").into_response(),
    }
}
