//! Helper functions shared across the handlers:
//!
//! - [`codegen`] - deterministic short-code derivation
//! - [`url_norm`] - URL normalization
//! - [`db_error`] - classification of database errors

pub mod codegen;
pub mod db_error;
pub mod url_norm;
