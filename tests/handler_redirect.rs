mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_mapper::api::handlers::redirect_handler;

fn create_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "abc", "https://example.com").await;
    let server = create_app(pool);

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::create_test_pool().await;
    let server = create_app(pool);

    let response = server.get("/does-not-exist").await;

    response.assert_status_not_found();
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "Abc", "https://example.com").await;
    let server = create_app(pool);

    assert_eq!(server.get("/Abc").await.status_code(), 302);
    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_location_is_byte_exact() {
    let pool = common::create_test_pool().await;
    let url = "HTTPS://Example.COM:443/Some/Path?q=%20x&y=1#Frag";
    common::create_test_mapping(&pool, "exact", url).await;
    let server = create_app(pool);

    let response = server.get("/exact").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location").as_bytes(), url.as_bytes());
}

#[tokio::test]
async fn test_redirect_preserves_non_ascii_bytes() {
    let pool = common::create_test_pool().await;
    let url = "https://пример.рф/путь";
    common::create_test_mapping(&pool, "idn", url).await;
    let server = create_app(pool);

    let response = server.get("/idn").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location").as_bytes(), url.as_bytes());
}

#[tokio::test]
async fn test_redirect_percent_decoded_code() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "a b", "https://example.com/space").await;
    let server = create_app(pool);

    let response = server.get("/a%20b").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/space");
}

#[tokio::test]
async fn test_redirect_undecodable_code_is_not_found() {
    let pool = common::create_test_pool().await;
    let server = create_app(pool);

    for path in ["/%FF", "/abc%C3", "/%80%80"] {
        let response = server.get(path).await;

        response.assert_status_not_found();
        assert!(response.as_bytes().is_empty());
    }
}
