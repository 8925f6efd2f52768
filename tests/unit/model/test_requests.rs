use assert_json_diff::assert_json_eq;
use portainer_client::model::requests::{
    AuthRequest, ContainerFilters, ContainerListQuery, StatsQuery,
};
use serde_json::{Value, json};

fn json_value<T: serde::Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn auth_request_uses_portainer_field_names() {
    let body = json_value(&AuthRequest::new("admin", "pw"));
    assert_json_eq!(body, json!({"Username": "admin", "Password": "pw"}));
}

#[test]
fn container_list_queries_never_swap_all_flags() {
    assert_eq!(ContainerListQuery::all().all, 1);
    assert_eq!(ContainerListQuery::running().all, 0);

    assert_json_eq!(json_value(&ContainerListQuery::all()), json!({"all": 1}));
    assert_json_eq!(json_value(&ContainerListQuery::running()), json!({"all": 0}));
}

#[test]
fn stack_query_lists_everything_without_streaming() {
    let query = ContainerListQuery::for_stack("wordpress").unwrap();

    assert_eq!(query.all, 1);
    assert_eq!(query.stream, Some(false));
    assert_eq!(
        query.filters.as_deref(),
        Some(r#"{"label":["com.docker.compose.project=wordpress"]}"#)
    );
}

#[test]
fn stack_filter_round_trips_names_with_quotes_and_backslashes() {
    let name = r#"the"stack\x"#;
    let query = ContainerListQuery::for_stack(name).unwrap();

    let filters: ContainerFilters = serde_json::from_str(query.filters.as_deref().unwrap()).unwrap();
    assert_eq!(
        filters.label,
        vec![format!("com.docker.compose.project={name}")]
    );
}

#[test]
fn filters_accumulate_labels() {
    let filters = ContainerFilters::for_stack("web").with_label("tier=frontend");
    assert_json_eq!(
        json_value(&filters),
        json!({"label": ["com.docker.compose.project=web", "tier=frontend"]})
    );
    assert_eq!(ContainerFilters::default().to_json().unwrap(), "{}");
}

#[test]
fn stats_query_is_a_snapshot() {
    assert_json_eq!(json_value(&StatsQuery::snapshot()), json!({"stream": false}));
}
