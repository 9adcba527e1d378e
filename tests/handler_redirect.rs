mod common;

use axum::http::StatusCode;
use serde_json::json;
use url_shortener::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com/docs?page=2" }))
        .await
        .json::<serde_json::Value>();
    let code = common::code_of(created["short_url"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://example.com/docs?page=2"
    );
}

#[tokio::test]
async fn test_redirect_seeded_mapping() {
    let (state, repo) = common::create_test_state_with_repo();
    repo.insert("abc12345", "https://rust-lang.org/");
    let server = common::create_test_server(state);

    let response = server.get("/abc12345").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://rust-lang.org/");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/nonexistent-code").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_does_not_create_links() {
    let (state, repo) = common::create_test_state_with_repo();
    let server = common::create_test_server(state);

    server.get("/abc12345").await.assert_status_not_found();

    assert!(repo.is_empty());
    assert!(repo.domain_counts().is_empty());
}

#[tokio::test]
async fn test_redirect_trailing_slash() {
    let (state, repo) = common::create_test_state_with_repo();
    repo.insert("abc12345", "https://rust-lang.org/");
    let server = common::create_test_server(state);

    let response = server.get("/abc12345/").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://rust-lang.org/");
}
