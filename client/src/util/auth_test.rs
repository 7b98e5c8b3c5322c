use super::*;

#[test]
fn token_key_matches_browser_slot() {
    assert_eq!(TOKEN_STORAGE_KEY, "token");
}

#[test]
fn logout_outside_browser_is_a_no_op() {
    clear_token();
    logout();
    assert_eq!(LOGIN_PATH, "/login");
}
