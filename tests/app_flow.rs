mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shortlink::routes::router;

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await;
    created.assert_status_ok();

    let short_url = created.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let code = common::code_of(&short_url);

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[tokio::test]
async fn test_health_is_not_treated_as_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "UP");
}

#[tokio::test]
async fn test_redirect_to_seeded_code() {
    let (state, store) = common::create_test_state();
    common::seed(&store, "Q9w8E7", "https://example.org/").await;

    let server = TestServer::new(router(state)).unwrap();
    let response = server.get("/Q9w8E7").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.org/");
}

#[tokio::test]
async fn test_shorten_requires_post() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/shorten").await;

    // `/shorten` is only routed for POST; GET falls through to method handling
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
