//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honored via `dotenvy`.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite://urls.db`).
//!   The database file is created on startup if it does not exist.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix of issued short URLs
//!   (default: `http://<LISTEN>`)
//! - `FLASH_SECRET` - Signing secret for the flash-message cookie.
//!   A random secret is generated at startup when unset, which means
//!   pending flash messages do not survive a restart.
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::{Context, Result};
use rand::RngCore;
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Prefix of the short URLs shown to users, without a trailing slash.
    pub base_url: String,
    /// Signing secret for the flash cookie, injected at startup rather than
    /// held in process-wide mutable state.
    pub flash_secret: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, filling defaults.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://{listen_addr}"))
            .trim_end_matches('/')
            .to_string();

        let flash_secret = env::var("FLASH_SECRET").unwrap_or_else(|_| generate_secret());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            flash_secret,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LISTEN` is not a valid socket address
    /// - `BASE_URL` is not a valid URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `FLASH_SECRET` is empty
    /// - `DB_MAX_CONNECTIONS` is zero
    pub fn validate(&self) -> Result<()> {
        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("LISTEN is not a valid socket address: {}", self.listen_addr))?;

        Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: {}", self.base_url))?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.flash_secret.is_empty() {
            anyhow::bail!("FLASH_SECRET must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }
}

/// Generates a random hex-encoded signing secret.
fn generate_secret() -> String {
    let mut buf = [0u8; 32];
    rand::rng().fill_bytes(&mut buf);
    hex::encode(buf)
}
