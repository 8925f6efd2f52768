use portainer_client::error::AppError;
use portainer_client::model::responses::AuthResponse;

#[test]
fn auth_response_yields_the_jwt() {
    let response: AuthResponse = serde_json::from_str(r#"{"jwt":"abc123"}"#).unwrap();
    assert_eq!(response.into_token().unwrap(), "abc123");
}

#[test]
fn auth_response_without_jwt_is_an_authentication_error() {
    let response: AuthResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert!(response.jwt.is_none());
    match response.into_token() {
        Err(AppError::Authentication(msg)) => assert!(msg.contains("missing jwt")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn auth_response_with_null_or_blank_jwt_is_rejected() {
    let null: AuthResponse = serde_json::from_str(r#"{"jwt":null}"#).unwrap();
    assert!(matches!(null.into_token(), Err(AppError::Authentication(_))));

    let blank: AuthResponse = serde_json::from_str(r#"{"jwt":"  "}"#).unwrap();
    assert!(matches!(blank.into_token(), Err(AppError::Authentication(_))));
}
