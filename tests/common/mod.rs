#![allow(dead_code)]

use sqlx::SqlitePool;
use urlsnip::flash::FlashKey;
use urlsnip::state::AppState;
use urlsnip::storage::LinkStore;

pub const TEST_SECRET: &str = "test-flash-secret";
pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState {
        store: LinkStore::new(pool),
        base_url: TEST_BASE_URL.to_string(),
        flash_key: FlashKey::new(TEST_SECRET),
    }
}

pub async fn create_test_url(pool: &SqlitePool, url: &str, code: &str) {
    sqlx::query("INSERT INTO urls (original_url, short_code) VALUES (?1, ?2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a record with a created_at shifted into the past, for ordering tests.
pub async fn create_test_url_aged(pool: &SqlitePool, url: &str, code: &str, age: &str) {
    sqlx::query(
        "INSERT INTO urls (original_url, short_code, created_at) \
         VALUES (?1, ?2, datetime('now', ?3))",
    )
    .bind(url)
    .bind(code)
    .bind(age)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
