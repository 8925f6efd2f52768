use portainer_client::prelude::*;

#[test]
fn url_joins_base_and_path_with_a_single_slash() {
    let http = HttpClient::new(Config::with_base_url("http://localhost:9000/api/")).unwrap();

    assert_eq!(http.url("auth"), "http://localhost:9000/api/auth");
    assert_eq!(http.url("/stacks"), "http://localhost:9000/api/stacks");
}

#[test]
fn absolute_urls_are_used_verbatim() {
    let http = HttpClient::new(Config::with_base_url("http://localhost:9000/api")).unwrap();
    assert_eq!(
        http.url("https://other.host/api/status"),
        "https://other.host/api/status"
    );
}

#[tokio::test]
async fn header_snapshot_is_detached_from_later_changes() {
    let http = HttpClient::new(Config::with_base_url("http://localhost:9000/api")).unwrap();
    http.session().write().await.set_token("first");

    let snapshot = http.headers().await;
    http.session().write().await.set_token("second");

    assert_eq!(snapshot.lines(), vec!["Authorization: Bearer first".to_string()]);
    assert_eq!(
        http.headers().await.lines(),
        vec!["Authorization: Bearer second".to_string()]
    );
}

#[test]
fn invalid_base_url_is_a_config_error() {
    assert!(matches!(
        HttpClient::new(Config::with_base_url("://nope")),
        Err(AppError::Config(_))
    ));
}
