//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - input form, shows and clears pending flash messages
//! - `POST /shorten`  - create or reuse a short code, redirect home
//! - `GET  /stats`    - table of all mappings with click counts
//! - `GET  /{code}`   - redirect to the stored URL, counting the click
//!
//! Static routes win over the `{code}` capture, so `/stats` is never
//! shadowed by a short code. Trailing slashes are trimmed before routing.

use crate::handlers::{home_handler, redirect_handler, shorten_handler, stats_handler};
use crate::middlewares::access_log::access_log_mw;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(middleware::from_fn(access_log_mw));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
