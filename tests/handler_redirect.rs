mod common;

use axum::http::StatusCode;
use common::{StubProbe, StubShortener};
use std::sync::Arc;
use url_shortener_edge::prelude::*;

#[tokio::test]
async fn test_redirect_to_original_url() {
    let shortener = Arc::new(StubShortener::resolving_to("https://example.com/target"));
    let (server, _) = common::create_test_server(shortener.clone(), Arc::new(StubProbe::healthy()));

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert!(response.as_bytes().is_empty());
    assert_eq!(shortener.received(), vec!["abc123"]);
}

#[tokio::test]
async fn test_redirect_unknown_code_is_bad_request() {
    let shortener = Arc::new(StubShortener::failing());
    let (server, _) = common::create_test_server(shortener, Arc::new(StubProbe::healthy()));

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.as_bytes().is_empty());
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_is_never_compressed() {
    let long_target = format!("https://example.com/{}", "a".repeat(2000));
    let shortener = Arc::new(StubShortener::resolving_to(&long_target));
    let (server, _) = common::create_test_server(shortener, Arc::new(StubProbe::healthy()));

    let response = server
        .get("/abc123")
        .add_header("accept-encoding", "gzip")
        .await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert!(response.headers().get("content-encoding").is_none());
}

#[tokio::test]
async fn test_redirect_round_trip_with_memory_shortener() {
    let shortener = Arc::new(MemoryShortener::new("http://localhost:8080/"));
    let (server, _) = common::create_test_server(shortener.clone(), Arc::new(StubProbe::healthy()));

    let short_url = shortener.shorten("https://rust-lang.org/learn").await.unwrap();
    let code = short_url.rsplit('/').next().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://rust-lang.org/learn");
}
