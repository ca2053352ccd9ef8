mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use sqlx::SqlitePool;
use urlsnip::handlers::{home_handler, redirect_handler};

fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_to_stored_url(pool: SqlitePool) {
    common::create_test_url(&pool, "https://example.com/target", "abc123").await;
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_clicks(pool: SqlitePool) {
    common::create_test_url(&pool, "https://example.com", "abc123").await;
    let server = TestServer::new(app(pool.clone())).unwrap();

    for _ in 0..3 {
        server.get("/abc123").await;
    }

    assert_eq!(common::clicks_for(&pool, "abc123").await, 3);
}

#[sqlx::test]
async fn test_unknown_code_redirects_home(pool: SqlitePool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/doesnotexist").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");
}

#[sqlx::test]
async fn test_unknown_code_flashes_not_found(pool: SqlitePool) {
    let server = TestServer::builder().save_cookies().build(app(pool)).unwrap();

    server.get("/doesnotexist").await;

    let page = server.get("/").await;
    assert!(page.text().contains("Short URL not found"));
}

#[sqlx::test]
async fn test_unknown_code_does_not_touch_counters(pool: SqlitePool) {
    common::create_test_url(&pool, "https://example.com", "abc123").await;
    let server = TestServer::new(app(pool.clone())).unwrap();

    server.get("/doesnotexist").await;

    assert_eq!(common::clicks_for(&pool, "abc123").await, 0);
}
