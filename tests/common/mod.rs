#![allow(dead_code)]

use axum_test::TestServer;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use shorthand::routes::api_router;
use shorthand::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_HOST: &str = "short.com";

pub fn create_test_state() -> AppState {
    AppState::in_memory(TEST_SIGNING_SECRET.to_string(), None, 10)
}

pub fn create_test_state_with_base(base: &str) -> AppState {
    AppState::in_memory(TEST_SIGNING_SECRET.to_string(), Some(base.to_string()), 10)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}

pub fn basic_auth(account_id: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{account_id}:{password}")))
}

/// Opens an account over HTTP and returns its secret.
pub async fn open_account(server: &TestServer, account_id: &str) -> String {
    let response = server
        .post("/account")
        .json(&json!({ "AccountId": account_id }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    body["password"].as_str().unwrap().to_string()
}

/// Registers a URL over HTTP and returns the code part of the short URL.
pub async fn register_url(
    server: &TestServer,
    auth: &str,
    url: &str,
    redirect_type: Option<Value>,
) -> String {
    let mut body = json!({ "url": url });
    if let Some(kind) = redirect_type {
        body["redirectType"] = kind;
    }

    let response = server
        .post("/register")
        .add_header("Authorization", auth)
        .add_header("Host", TEST_HOST)
        .json(&body)
        .await;
    response.assert_status_ok();

    let short_url = response.json::<Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();
    short_url.rsplit('/').next().unwrap().to_string()
}
