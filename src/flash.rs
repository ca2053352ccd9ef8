//! Signed flash-message cookies.
//!
//! A flash message is a one-shot notification set during a redirect and
//! shown on the next rendered page. The value travels in a cookie signed
//! with HMAC-SHA256 so a client cannot forge or alter it; the signing key
//! comes from [`crate::config::Config::flash_secret`].
//!
//! # Cookie Format
//!
//! ```text
//! flash=<base64url(level \x1f message)>.<base64url(hmac)>
//! ```

use axum::http::{HeaderMap, header};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const COOKIE_NAME: &str = "flash";

const SEPARATOR: char = '\x1f';

/// Severity of a flash message, mirrored by the page styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Level::Success),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

/// A one-shot user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// HMAC key for signing flash cookies, constructed once at startup.
#[derive(Clone)]
pub struct FlashKey(Vec<u8>);

impl FlashKey {
    pub fn new(secret: &str) -> Self {
        Self(secret.as_bytes().to_vec())
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.0).expect("HMAC accepts keys of any length")
    }
}

/// Renders the `Set-Cookie` value carrying a signed flash message.
pub fn set_cookie(key: &FlashKey, flash: &Flash) -> String {
    let payload = format!("{}{SEPARATOR}{}", flash.level.as_str(), flash.message);
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload.as_bytes());

    let mut mac = key.mac();
    mac.update(payload_b64.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{COOKIE_NAME}={payload_b64}.{sig_b64}; Path=/; HttpOnly; SameSite=Lax")
}

/// Renders the `Set-Cookie` value that expires the flash cookie.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extracts and verifies the flash message from request headers.
///
/// Returns `None` when the cookie is absent, malformed, or carries an
/// invalid signature.
pub fn from_headers(headers: &HeaderMap, key: &FlashKey) -> Option<Flash> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    let value = raw.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(name), Some(value)) if name == COOKIE_NAME => Some(value.to_string()),
            _ => None,
        }
    })?;

    decode(&value, key)
}

fn decode(value: &str, key: &FlashKey) -> Option<Flash> {
    let (payload_b64, sig_b64) = value.split_once('.')?;

    let sig = URL_SAFE_NO_PAD.decode(sig_b64).ok()?;
    let mut mac = key.mac();
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&sig).ok()?;

    let payload = String::from_utf8(URL_SAFE_NO_PAD.decode(payload_b64).ok()?).ok()?;
    let (level, message) = payload.split_once(SEPARATOR)?;

    Some(Flash {
        level: Level::parse(level)?,
        message: message.to_string(),
    })
}
