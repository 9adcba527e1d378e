mod common;

use serde_json::json;
use url_shortener::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_shorten_single_url_success() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://localhost:8080/GCzO2zOp");
    assert_eq!(json["original_url"], "https://example.com");
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let (state, repo) = common::create_test_state_with_repo();
    let server = common::create_test_server(state);

    let response1 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com/page" }))
        .await;
    let json1 = response1.json::<serde_json::Value>();

    let response2 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com/page" }))
        .await;
    let json2 = response2.json::<serde_json::Value>();

    assert_eq!(json1["short_url"], json2["short_url"]);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.domain_counts().get("dedup.com"), Some(&1));
}

#[tokio::test]
async fn test_shorten_url_normalization() {
    let server = common::create_test_server(common::create_test_state());

    let without_scheme = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com" }))
        .await
        .json::<serde_json::Value>();

    let with_scheme = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://EXAMPLE.COM:443" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(without_scheme["short_url"], with_scheme["short_url"]);
    assert_eq!(without_scheme["original_url"], "example.com");
    assert_eq!(with_scheme["original_url"], "https://EXAMPLE.COM:443");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, repo) = common::create_test_state_with_repo();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not a valid url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid URL format")
    );
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_shorten_unsupported_scheme() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "URL must use http or https scheme"
    );
}

#[tokio::test]
async fn test_shorten_blank_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_empty_url_field() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/api/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request body");
}
