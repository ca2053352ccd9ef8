//! HTTP server initialization and runtime setup.
//!
//! Handles the SQLite pool, migrations, and the Axum server lifecycle.

use crate::config::Config;
use crate::flash::FlashKey;
use crate::routes::app_router;
use crate::state::AppState;
use crate::storage::LinkStore;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite pool (the database file is created if missing)
/// - Schema migrations
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated, the
/// listen address cannot be bound, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState {
        store: LinkStore::new(pool),
        base_url: config.base_url.clone(),
        flash_key: FlashKey::new(&config.flash_secret),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
