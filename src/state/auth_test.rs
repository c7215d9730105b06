use super::*;

fn bob() -> User {
    User { id: "u2".to_owned(), name: "Bob".to_owned(), email: "bob@example.com".to_owned() }
}

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_is_loading_and_anonymous() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolved_with_user_is_signed_in() {
    let state = AuthState::resolved(Some(bob()));
    assert!(!state.loading);
    assert!(state.is_signed_in());
    assert_eq!(state.user.map(|u| u.name), Some("Bob".to_owned()));
}

#[test]
fn resolved_without_user_is_anonymous() {
    let state = AuthState::resolved(None);
    assert_eq!(state, AuthState::default());
}
