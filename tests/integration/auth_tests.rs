use crate::common;
use portainer_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = common::authenticated_client().await;

    let session = client.get_session().await;
    assert_eq!(session.state(), SessionState::Authenticated);
    assert_eq!(session.headers.bearer_count(), 1);
}

#[tokio::test]
#[ignore]
async fn test_reuse_token_in_new_client() {
    let client = common::authenticated_client().await;
    let token = client.auth_token().await.expect("token should be set");

    let other = Client::from_env().expect("Failed to create client");
    other.set_auth_token(&token).await.unwrap();

    let info = other.docker_info(common::endpoint_id()).await.unwrap();
    assert!(info.get("ID").is_some());
}
