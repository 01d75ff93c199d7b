//! Integration tests for the HTTP adapter using wiremock mock server

use bd_api::{AuthApi, AuthService, Client, ClientError};
use bd_config::{ApiConfig, UnauthorizedPolicy};
use bd_core::{Session, User};
use bd_storage::{MemoryStorage, SessionRepository};

use std::sync::Arc;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path},
};

async fn logged_in_sessions(token: &str) -> SessionRepository {
    let sessions = SessionRepository::new(Arc::new(MemoryStorage::new()));
    sessions
        .save(&Session::new(
            token.to_string(),
            Some("r1".to_string()),
            Some(User::new("1", "a@b.com", "Ann")),
        ))
        .await
        .unwrap();
    sessions
}

#[tokio::test]
async fn test_bearer_token_attached_from_storage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1", "email": "a@b.com", "name": "Ann"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let service = AuthService::new(Client::new(&mock_server.uri(), sessions));

    let user = service.current_user().await.unwrap();
    assert_eq!(user.name, "Ann");
}

#[tokio::test]
async fn test_token_read_fresh_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1", "email": "a@b.com", "name": "Ann"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let client = Client::new(&mock_server.uri(), sessions.clone());

    // Token rotated behind the client's back
    sessions
        .save(&Session::new("t2".to_string(), None, None))
        .await
        .unwrap();

    let result = AuthService::new(client).current_user().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1", "email": "a@b.com", "name": "Ann"
        })))
        .mount(&mock_server)
        .await;

    let sessions = SessionRepository::new(Arc::new(MemoryStorage::new()));
    let users = bd_api::UserService::new(Client::new(&mock_server.uri(), sessions));

    assert!(users.get_profile().await.is_ok());
}

#[tokio::test]
async fn test_unauthorized_with_force_logout_clears_storage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token expired"
        })))
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let client = Client::new(&mock_server.uri(), sessions.clone())
        .with_unauthorized_policy(UnauthorizedPolicy::ForceLogout);

    let err = AuthService::new(client).current_user().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_that!(sessions.access_token().await.unwrap(), none());
}

#[tokio::test]
async fn test_unauthorized_with_pass_through_keeps_storage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let client = Client::new(&mock_server.uri(), sessions.clone())
        .with_unauthorized_policy(UnauthorizedPolicy::PassThrough);

    let err = AuthService::new(client).current_user().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_that!(
        sessions.access_token().await.unwrap().as_deref(),
        some(eq("t1"))
    );
}

#[tokio::test]
async fn test_error_envelope_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "User not found"
            }
        })))
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let users = bd_api::UserService::new(Client::new(&mock_server.uri(), sessions));

    let err = users.get_user("42").await.unwrap_err();
    match err {
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "User not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let users = bd_api::UserService::new(Client::new(&mock_server.uri(), sessions));

    let err = users.delete_user("42").await.unwrap_err();
    assert_eq!(err.display_message(), "Service Unavailable");
}

#[tokio::test]
async fn test_malformed_success_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let sessions = logged_in_sessions("t1").await;
    let err = AuthService::new(Client::new(&mock_server.uri(), sessions))
        .current_user()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_request_timeout_from_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "1", "email": "a@b.com", "name": "Ann"}))
                .set_delay(Duration::from_millis(1_000)),
        )
        .mount(&mock_server)
        .await;

    let api = ApiConfig {
        base_url: mock_server.uri(),
        timeout_ms: 100,
    };
    let sessions = logged_in_sessions("t1").await;
    let client = Client::from_config(&api, UnauthorizedPolicy::ForceLogout, sessions).unwrap();

    let err = AuthService::new(client).current_user().await.unwrap_err();

    assert_eq!(err.display_message(), "Request timed out");
}
