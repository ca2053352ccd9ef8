//! # urlsnip
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! A long URL submitted through the web form is mapped to a deterministic
//! short code (a truncated SHA-256 digest of the normalized URL). Visiting
//! the short code redirects to the stored URL and counts the click; `/stats`
//! lists every mapping with its click count.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to a local urls.db file
//! export DATABASE_URL="sqlite://urls.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod server;
pub mod state;
pub mod storage;
pub mod utils;

pub use error::AppError;
pub use state::AppState;
