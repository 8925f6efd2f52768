use portainer_client::session::{Header, HeaderSet};

#[test]
fn set_bearer_keeps_other_headers_and_order() {
    let mut set = HeaderSet::new();
    set.push(Header::new("X-API-Key", "k"));
    set.push(Header::bearer("old"));
    set.push(Header::new("X-Registry-Auth", "r"));

    set.set_bearer("new");

    assert_eq!(
        set.lines(),
        vec![
            "X-API-Key: k".to_string(),
            "X-Registry-Auth: r".to_string(),
            "Authorization: Bearer new".to_string(),
        ]
    );
}

#[test]
fn set_bearer_removes_every_stale_bearer() {
    let mut set = HeaderSet::new();
    for token in ["t1", "t2", "t3"] {
        set.push(Header::bearer(token));
    }
    assert_eq!(set.bearer_count(), 3);

    set.set_bearer("t4");

    assert_eq!(set.bearer_count(), 1);
    assert_eq!(set.len(), 1);
    assert_eq!(set.bearer().map(|h| h.value.as_str()), Some("Bearer t4"));
}

#[test]
fn set_bearer_is_idempotent() {
    let mut set = HeaderSet::new();
    set.set_bearer("same");
    let once = set.clone();
    set.set_bearer("same");

    assert_eq!(set, once);
}

#[test]
fn lowercase_authorization_headers_count_as_bearer() {
    let mut set = HeaderSet::new();
    set.push(Header::new("authorization", "Bearer legacy"));
    set.set_bearer("current");

    assert_eq!(set.lines(), vec!["Authorization: Bearer current".to_string()]);
}

#[test]
fn basic_authorization_is_left_alone() {
    let mut set = HeaderSet::new();
    set.push(Header::new("Authorization", "Basic YWRtaW46cHc="));
    set.remove_bearer();

    assert_eq!(set.len(), 1);
    assert!(set.bearer().is_none());
}
