mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use url_mapper::AppError;
use url_mapper::application::services::MappingService;
use url_mapper::domain::entities::NewMapping;
use url_mapper::infrastructure::persistence::SqliteMappingRepository;
use url_mapper::routes::app_router;

async fn post_raw(
    pool: sqlx::SqlitePool,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, String) {
    let app = app_router(common::create_test_state(pool));

    let mut request = Request::builder().method(Method::POST).uri("/api/mappings");
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = app
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(app_router(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/api/mappings")
        .json(&json!({
            "short_code": "abc",
            "long_url": "https://example.com"
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<serde_json::Value>()["short_code"], "abc");

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    server.get("/does-not-exist").await.assert_status_not_found();
}

#[tokio::test]
async fn test_api_prefix_is_a_plain_short_code() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "api", "https://example.com/api").await;
    let server = TestServer::new(app_router(common::create_test_state(pool))).unwrap();

    let response = server.get("/api").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/api");
}

#[tokio::test]
async fn test_get_on_mappings_collection_not_allowed() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(app_router(common::create_test_state(pool))).unwrap();

    let response = server.get("/api/mappings").await;

    assert_eq!(response.status_code(), 405);
}

#[tokio::test]
async fn test_multi_segment_path_not_found() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(app_router(common::create_test_state(pool))).unwrap();

    server.get("/a/b").await.assert_status_not_found();
}

#[tokio::test]
async fn test_empty_body_is_invalid_payload() {
    let pool = common::create_test_pool().await;

    let (status, body) = post_raw(pool.clone(), Some("application/json"), "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payload"}"#);
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_payload() {
    let pool = common::create_test_pool().await;

    let (status, body) = post_raw(pool, Some("application/json"), r#"{"short_code": "abc""#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payload"}"#);
}

#[tokio::test]
async fn test_missing_content_type_is_invalid_payload() {
    let pool = common::create_test_pool().await;

    let (status, body) = post_raw(
        pool.clone(),
        None,
        r#"{"short_code":"abc","long_url":"https://example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payload"}"#);
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[tokio::test]
async fn test_non_json_content_type_is_invalid_payload() {
    let pool = common::create_test_pool().await;

    let (status, body) = post_raw(
        pool,
        Some("text/plain"),
        r#"{"short_code":"abc","long_url":"https://example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payload"}"#);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_code_have_one_winner() {
    let pool = common::create_test_pool().await;
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool.clone())));
    let service = Arc::new(MappingService::new(repository));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_mapping(NewMapping {
                        short_code: "race".to_string(),
                        long_url: format!("https://example.com/{i}"),
                    })
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut duplicates = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::DuplicateShortCode) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(common::count_mappings(&pool).await, 1);
}
