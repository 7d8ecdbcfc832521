use super::api::{CreateUserRequest, SignupError};
use super::client::SignupClient;
use crate::services::http::ErrorResponseInfo;

#[test]
fn test_signup_client_creation() {
    let client = SignupClient::new(
        "http://localhost:8080/signup".to_string(),
        "secret".to_string(),
    );
    assert_eq!(client.url, "http://localhost:8080/signup");
}

#[test]
fn test_create_user_request_serialization() {
    let request = CreateUserRequest {
        username: "alice",
        password: "Abcdefg123",
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({"username": "alice", "password": "Abcdefg123"})
    );
}

#[test]
fn test_auth_statuses_map_to_not_authenticated() {
    for status in [401, 403] {
        let info = ErrorResponseInfo {
            status_code: status,
            text: String::new(),
        };
        assert!(matches!(
            SignupError::from(info),
            SignupError::NotAuthenticated
        ));
    }
}

#[test]
fn test_500_maps_to_server_error() {
    let info = ErrorResponseInfo {
        status_code: 500,
        text: "internal error".to_string(),
    };
    assert!(matches!(SignupError::from(info), SignupError::Server));
}

#[test]
fn test_not_allowed_body_maps_to_password_not_allowed() {
    let info = ErrorResponseInfo {
        status_code: 422,
        text: r#"{"errors":["not_allowed"]}"#.to_string(),
    };
    assert!(matches!(
        SignupError::from(info),
        SignupError::PasswordNotAllowed
    ));
}

#[test]
fn test_other_error_tokens_map_to_generic_http_error() {
    let info = ErrorResponseInfo {
        status_code: 422,
        text: r#"{"errors":["too_common"]}"#.to_string(),
    };
    assert!(matches!(
        SignupError::from(info),
        SignupError::Http(Some(422), _)
    ));
}

#[test]
fn test_malformed_body_maps_to_generic_http_error() {
    let info = ErrorResponseInfo {
        status_code: 422,
        text: "<html>not json</html>".to_string(),
    };
    assert!(matches!(
        SignupError::from(info),
        SignupError::Http(Some(422), _)
    ));
}

#[tokio::test]
async fn test_create_user_with_invalid_url_is_generic_error() {
    let client = SignupClient::new("not a url".to_string(), String::new());
    let err = client
        .create_user("alice", "Abcdefg123")
        .await
        .expect_err("an invalid URL cannot be submitted to");
    assert!(matches!(err, SignupError::Http(None, _)));
}
