//! HTTP handlers for the four endpoints: home, shorten, redirect, stats.

mod home;
mod redirect;
mod shorten;
mod stats;

pub use home::home_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::flash::{self, Flash, FlashKey};

/// Plain `302 Found` redirect. Axum's `Redirect` only issues 303/307/308,
/// and the service answers with 302 like a classic form-driven app.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// `302 Found` redirect carrying a signed flash cookie.
pub(crate) fn flash_redirect(key: &FlashKey, flash: Flash, location: &str) -> Response {
    let mut response = found(location);

    match HeaderValue::from_str(&flash::set_cookie(key, &flash)) {
        Ok(cookie) => {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
        Err(e) => {
            // The message still reaches the user on a later page load, just
            // without the flash; the redirect itself must not fail.
            tracing::warn!(error = %e, "failed to encode flash cookie");
        }
    }

    response
}
