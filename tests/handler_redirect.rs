mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::redirect_handler;
use shortlink::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    common::seed(&store, "Xy3abQ", "https://example.com/target").await;

    let server = make_server(state);
    let response = server.get("/Xy3abQ").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keeps_url_verbatim() {
    let (state, store) = common::create_test_state();
    let url = "https://example.com/a/b?q=1&r=two#frag";
    common::seed(&store, "abc123", url).await;

    let server = make_server(state);
    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_codes_are_case_sensitive() {
    let (state, store) = common::create_test_state();
    common::seed(&store, "abcdef", "https://lower.example.com").await;

    let server = make_server(state);
    let response = server.get("/ABCDEF").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();

    let server = make_server(state);
    let response = server.get("/nope00").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "URL not found");
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let (state, _store) = common::create_test_state();

    let server = make_server(state);

    server.get("/abc").await.assert_status_not_found();
    server.get("/abcdefgh").await.assert_status_not_found();
    server.get("/abc-12").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = make_server(common::create_failing_state());

    let response = server.get("/abc123").await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
