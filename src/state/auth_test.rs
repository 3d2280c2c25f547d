use super::*;

#[test]
fn default_session_is_logged_out() {
    assert!(!AuthState::default().authenticated);
}
