#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use url_mapper::infrastructure::database;
use url_mapper::state::AppState;

/// Opens a fresh in-memory database with the schema applied.
///
/// The pool holds a single connection that never expires, since every
/// in-memory connection is a separate database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    database::init_schema(&pool).await.unwrap();

    pool
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO url_mapping (short_code, long_url) VALUES (?, ?) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mapping")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_long_url(pool: &SqlitePool, code: &str) -> Option<String> {
    sqlx::query_scalar("SELECT long_url FROM url_mapping WHERE short_code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::from_pool(pool)
}
