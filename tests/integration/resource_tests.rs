use crate::common;
use portainer_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_list_users_and_teams() {
    let client = common::authenticated_client().await;

    let users: Vec<Value> = client.users().list().await.unwrap();
    assert!(!users.is_empty());

    let teams: Vec<Value> = client.teams().list().await.unwrap();
    for team in teams {
        let id = team["Id"].as_u64().unwrap() as u32;
        let _: Value = client.team_memberships(id).list().await.unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn test_list_stacks_and_their_containers() {
    let client = common::authenticated_client().await;

    let stacks: Vec<Value> = client.stacks().list().await.unwrap();
    for stack in stacks {
        let endpoint = stack["EndpointId"].as_u64().unwrap() as u32;
        let name = stack["Name"].as_str().unwrap();
        let containers = client.stack_containers(endpoint, name).await.unwrap();
        assert!(containers.iter().all(|c| c["Labels"]["com.docker.compose.project"] == name));
    }
}
