use super::*;
use axum::http::HeaderValue;

struct RequireHeader;

impl Authenticator for RequireHeader {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        match headers.get("x-user").and_then(|v| v.to_str().ok()) {
            Some(name) => Ok(Identity { name: name.to_owned() }),
            None => Err(AuthError::MissingCredentials),
        }
    }
}

#[test]
fn no_auth_admits_empty_headers() {
    let identity = NoAuth.authenticate(&HeaderMap::new()).unwrap();
    assert_eq!(identity, Identity::anonymous());
}

#[test]
fn no_auth_entry_always_routes_to_chat() {
    assert_eq!(decide_entry(&NoAuth, &HeaderMap::new()), EntryDecision::Chat);
    assert_eq!(EntryDecision::Chat.route(), "/chat");
}

#[test]
fn rejecting_authenticator_routes_to_sign_in() {
    assert_eq!(decide_entry(&RequireHeader, &HeaderMap::new()), EntryDecision::SignIn);
    assert_eq!(EntryDecision::SignIn.route(), "/login");
}

#[test]
fn custom_authenticator_admits_with_credentials() {
    let mut headers = HeaderMap::new();
    headers.insert("x-user", HeaderValue::from_static("ada"));
    assert_eq!(decide_entry(&RequireHeader, &headers), EntryDecision::Chat);
}
