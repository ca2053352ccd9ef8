//! Shorten endpoint: normalize, derive a code, insert-or-fetch, flash.

use axum::Form;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, map_sqlx_error};
use crate::flash::Flash;
use crate::handlers::flash_redirect;
use crate::state::AppState;
use crate::utils::codegen::{MAX_CODE_ATTEMPTS, code_len_for_attempt, derive_code};
use crate::utils::db_error::is_unique_violation_on_code;
use crate::utils::url_norm::normalize_url;

#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /shorten` - always answers with a 302 to `/`; the outcome travels
/// in the flash cookie. Validation failures show their own message, any
/// storage failure collapses into a generic one with the cause logged.
pub async fn shorten_handler(
    State(st): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let raw = form.url.as_deref().unwrap_or("");

    match create_short_url(&st, raw).await {
        Ok(short_url) => flash_redirect(
            &st.flash_key,
            Flash::success(format!(
                "URL shortened successfully! Short URL: {short_url}"
            )),
            "/",
        ),
        Err(AppError::Validation { message, .. }) => {
            flash_redirect(&st.flash_key, Flash::error(message), "/")
        }
        Err(err) => {
            tracing::error!(error = ?err, "shorten request failed");
            flash_redirect(
                &st.flash_key,
                Flash::error("An error occurred while shortening the URL"),
                "/",
            )
        }
    }
}

/// Resolves the short URL for a submission, creating the record if needed.
///
/// The code is derived from the normalized URL, so an already-stored URL
/// produces its existing code and the upsert changes nothing. When the
/// truncated digest collides with a different URL's code, the derivation
/// widens (6 → 8 → 10 → 12 hex chars) until the insert succeeds.
async fn create_short_url(st: &AppState, raw: &str) -> Result<String, AppError> {
    let normalized =
        normalize_url(raw).map_err(|e| AppError::bad_request(e.to_string(), json!({"field": "url"})))?;

    for attempt in 0..MAX_CODE_ATTEMPTS {
        let code = derive_code(&normalized, code_len_for_attempt(attempt));

        match st.store.insert_or_get(&normalized, &code).await {
            Ok(code) => {
                return Ok(format!("{}/{}", st.base_url.trim_end_matches('/'), code));
            }
            Err(e) if is_unique_violation_on_code(&e) => {
                tracing::warn!(attempt, code = %code, "short code collision, widening");
                continue;
            }
            Err(e) => return Err(map_sqlx_error(e)),
        }
    }

    Err(AppError::internal(
        "Failed to derive a unique short code",
        json!({ "url": normalized }),
    ))
}
