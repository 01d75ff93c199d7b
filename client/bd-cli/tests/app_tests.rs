//! End-to-end command runs against an in-memory session store, bundled
//! fixtures and a wiremock auth server

use bd_cli::{App, CliError, Cli};
use bd_config::{Config, StorageBackend};

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{eq, some};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.storage.backend = StorageBackend::Memory;
    config.fixtures.min_delay_ms = 0;
    config.fixtures.max_delay_ms = 0;
    config
}

async fn run(app: &App, args: &[&str]) -> Result<Value, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("bankdash").chain(args.iter().copied())).unwrap();
    app.run(cli.command).await
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "1", "email": "a@b.com", "name": "Ann"},
            "token": "t1",
            "refreshToken": "r1"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_dashboard_loads_bundled_fixtures() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let page = run(&app, &["dashboard"]).await.unwrap();

    assert_that!(page["cards"].as_array().map(Vec::len), some(eq(3)));
    assert_that!(page["transactions"].as_array().map(Vec::len), some(eq(4)));
    assert_that!(page["balance"]["currencyType"].as_str(), some(eq("S$")));
    assert_that!(page["hasErrors"].as_bool(), some(eq(false)));
    assert_that!(page["isLoading"].as_bool(), some(eq(false)));
}

#[tokio::test]
async fn test_cards_freeze_toggles_card_at_position() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let cards = run(&app, &["cards", "freeze", "0"]).await.unwrap();

    assert_that!(cards[0]["isFrozen"].as_bool(), some(eq(true)));
    assert_that!(cards[1]["isFrozen"].as_bool(), some(eq(false)));
}

#[tokio::test]
async fn test_cards_remove_out_of_range_position_fails() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let result = run(&app, &["cards", "remove", "7"]).await;

    assert!(matches!(result, Err(CliError::NoCardAt { position: 7, .. })));
}

#[tokio::test]
async fn test_cards_add_appends_formatted_card() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let cards = run(
        &app,
        &[
            "cards",
            "add",
            "--holder",
            "Ann Lee",
            "--number",
            "4111-1111-1111-1111",
            "--cvv",
            "123",
            "--valid-thru",
            "04/29",
            "--provider",
            "visa",
        ],
    )
    .await
    .unwrap();

    let cards = cards.as_array().unwrap();
    assert_that!(cards.len(), eq(4));
    assert_that!(cards[3]["number"].as_str(), some(eq("4111 1111 1111 1111")));
    assert_that!(cards[3]["expiry"].as_str(), some(eq("04/29")));
    assert_that!(cards[3]["type"].as_str(), some(eq("visa")));
}

#[tokio::test]
async fn test_status_without_session_reports_signed_out() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let status = run(&app, &["session", "status"]).await.unwrap();

    assert_that!(status["isAuthenticated"].as_bool(), some(eq(false)));
}

#[tokio::test]
async fn test_whoami_without_session_is_not_authenticated() {
    let app = App::from_config(&config("http://127.0.0.1:9")).unwrap();

    let result = run(&app, &["session", "whoami"]).await;

    let message = result.unwrap_err().display_message();
    assert_that!(message.as_str(), eq("You are not signed in"));
}

#[tokio::test]
async fn test_login_then_whoami_validates_token_once() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1", "email": "a@b.com", "name": "Ann Lee"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = App::from_config(&config(&mock_server.uri())).unwrap();

    let status = run(&app, &["session", "login", "--email", "a@b.com", "--password", "x"])
        .await
        .unwrap();
    let user = run(&app, &["session", "whoami"]).await.unwrap();

    assert_that!(status["isAuthenticated"].as_bool(), some(eq(true)));
    assert_that!(user["name"].as_str(), some(eq("Ann Lee")));
}

#[tokio::test]
async fn test_whoami_with_rejected_token_ends_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    let app = App::from_config(&config(&mock_server.uri())).unwrap();
    run(&app, &["session", "login", "--email", "a@b.com", "--password", "x"])
        .await
        .unwrap();

    let result = run(&app, &["session", "whoami"]).await;
    let status = run(&app, &["session", "status"]).await.unwrap();

    assert!(result.is_err());
    assert_that!(status["isAuthenticated"].as_bool(), some(eq(false)));
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let app = App::from_config(&config(&mock_server.uri())).unwrap();
    run(&app, &["session", "login", "--email", "a@b.com", "--password", "x"])
        .await
        .unwrap();

    let status = run(&app, &["session", "logout"]).await.unwrap();

    assert_that!(status["isAuthenticated"].as_bool(), some(eq(false)));
    assert_that!(status["error"].is_string(), eq(true));
}
