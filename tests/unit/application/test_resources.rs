use crate::common::{JSON, client_for};
use mockito::{Matcher, Server};
use portainer_client::prelude::*;

#[test]
fn top_level_resources_map_to_their_segments() {
    let client = client_for("http://localhost:9000/api");

    assert_eq!(client.registries().path(), "registries");
    assert_eq!(client.endpoints().path(), "endpoints");
    assert_eq!(client.stacks().path(), "stacks");
    assert_eq!(client.users().path(), "users");
    assert_eq!(client.teams().path(), "teams");
}

#[test]
fn membership_resources_interpolate_the_parent_id() {
    let client = client_for("http://localhost:9000/api");

    assert_eq!(client.user_memberships(3).path(), "users/3/memberships");
    assert_eq!(client.team_memberships(7).path(), "teams/7/memberships");
    assert_eq!(
        client.user_memberships(3).url(),
        "http://localhost:9000/api/users/3/memberships"
    );
}

#[tokio::test]
async fn building_handles_performs_no_requests() {
    let mut server = Server::new_async().await;
    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let _ = (
        client.registries(),
        client.endpoints(),
        client.stacks(),
        client.users(),
        client.teams(),
        client.user_memberships(1),
        client.team_memberships(1),
    );

    any_get.assert_async().await;
    any_post.assert_async().await;
}

#[tokio::test]
async fn handles_obtained_earlier_use_the_latest_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer late")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"[{"Id":1,"Username":"admin"}]"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let users = client.users();
    client.set_auth_token("early").await.unwrap();
    client.set_auth_token("late").await.unwrap();

    let list: Vec<Value> = users.list().await.unwrap();
    assert_eq!(list[0]["Username"], "admin");
    mock.assert_async().await;
}

#[tokio::test]
async fn crud_calls_use_the_expected_methods_and_paths() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", "/teams/4")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"{"Id":4,"Name":"ops"}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/teams")
        .match_body(Matcher::Json(json!({"Name": "dev"})))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"{"Id":5,"Name":"dev"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/teams/5")
        .match_body(Matcher::Json(json!({"Name": "devs"})))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"{"Id":5,"Name":"devs"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/teams/5")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let teams = client.teams();

    let team: Value = teams.get(4).await.unwrap();
    assert_eq!(team["Name"], "ops");

    let created: Value = teams.create(&json!({"Name": "dev"})).await.unwrap();
    assert_eq!(created["Id"], 5);

    let updated: Value = teams.update(5, &json!({"Name": "devs"})).await.unwrap();
    assert_eq!(updated["Name"], "devs");

    let deleted: Value = teams.delete(5).await.unwrap();
    assert_eq!(deleted, Value::Null);

    get.assert_async().await;
    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn membership_handles_list_their_collection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/2/memberships")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"[{"Id":1,"UserID":2,"TeamID":4,"Role":2}]"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let memberships: Vec<Value> = client.user_memberships(2).list().await.unwrap();

    assert_eq!(memberships[0]["TeamID"], 4);
    mock.assert_async().await;
}

#[tokio::test]
async fn list_with_query_forwards_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/endpoints")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let endpoints: Vec<Value> = client
        .endpoints()
        .list_with_query(&[("limit", "10")])
        .await
        .unwrap();

    assert!(endpoints.is_empty());
    mock.assert_async().await;
}
