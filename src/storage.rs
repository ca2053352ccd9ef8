//! SQLite-backed persistence for URL records.
//!
//! Every operation is a single statement against the pool; nothing spans
//! multiple statements, so the store relies on the schema's UNIQUE
//! constraints for consistency under concurrent requests.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// A stored URL mapping.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

/// Handle to the `urls` table.
#[derive(Clone)]
pub struct LinkStore {
    pool: SqlitePool,
}

impl LinkStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Exact-match lookup of the code stored for a normalized URL.
    pub async fn find_by_url(&self, url: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT short_code FROM urls WHERE original_url = ?1")
            .bind(url)
            .fetch_optional(&self.pool)
            .await
    }

    /// Exact-match lookup of the full record behind a short code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, original_url, short_code, created_at, clicks \
             FROM urls WHERE short_code = ?1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
    }

    /// Atomic insert-or-fetch keyed on the normalized URL.
    ///
    /// Returns the canonical code for `url`: the freshly inserted one, or
    /// the pre-existing one when the URL is already stored. Two concurrent
    /// identical submissions therefore resolve to the same code without a
    /// separate check-then-insert step.
    ///
    /// A unique violation on `short_code` (the candidate code is taken by a
    /// *different* URL) surfaces as an error for the caller's retry loop.
    pub async fn insert_or_get(&self, url: &str, code: &str) -> Result<String, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES (?1, ?2)
            ON CONFLICT (original_url) DO UPDATE
              SET original_url = excluded.original_url
            RETURNING short_code
            "#,
        )
        .bind(url)
        .bind(code)
        .fetch_one(&self.pool)
        .await
    }

    /// Counts a click and returns the redirect target in one statement.
    ///
    /// Returns `None` without side effects when the code is unknown.
    pub async fn increment_clicks(&self, code: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE urls SET clicks = clicks + 1 WHERE short_code = ?1 RETURNING original_url",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
    }

    /// All records, newest first. `id` breaks ties within one timestamp
    /// because `CURRENT_TIMESTAMP` has second resolution.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, original_url, short_code, created_at, clicks \
             FROM urls ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
