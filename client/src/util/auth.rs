//! Browser-side auth token slot.
//!
//! Sign-in is not implemented; the server admits every session at entry.
//! Logout still clears the reserved token key and hands navigation back to
//! the server's `/login` entry route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Local storage key reserved for an auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Server entry route used after logout.
pub const LOGIN_PATH: &str = "/login";

/// Remove the stored auth token, if any.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Clear the token and leave the single-page app for the `/login` entry route.
pub fn logout() {
    clear_token();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}
