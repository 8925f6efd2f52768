use portainer_client::session::{Session, SessionState};

#[test]
fn new_session_is_unauthenticated() {
    let session = Session::new();

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(!session.is_authenticated());
    assert!(session.auth_token.is_none());
    assert!(session.authenticated_at.is_none());
    assert!(session.headers.is_empty());
}

#[test]
fn set_token_authenticates_and_replaces() {
    let mut session = Session::new();
    session.set_token("one");
    let first_at = session.authenticated_at;

    session.set_token("two");

    assert_eq!(session.state(), SessionState::Authenticated);
    assert_eq!(session.auth_token.as_deref(), Some("two"));
    assert_eq!(session.headers.bearer_count(), 1);
    assert!(session.authenticated_at >= first_at);
}
