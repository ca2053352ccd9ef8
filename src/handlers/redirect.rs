//! Short-code redirect endpoint.

use axum::extract::{Path, State};
use axum::response::Response;

use crate::flash::Flash;
use crate::handlers::{flash_redirect, found};
use crate::state::AppState;

/// `GET /{code}` - one `UPDATE .. RETURNING` both counts the click and
/// fetches the target, so the increment can never race the lookup. An
/// unknown code flashes "not found" and sends the visitor home.
pub async fn redirect_handler(State(st): State<AppState>, Path(code): Path<String>) -> Response {
    match st.store.increment_clicks(&code).await {
        Ok(Some(url)) => found(&url),
        Ok(None) => flash_redirect(&st.flash_key, Flash::error("Short URL not found"), "/"),
        Err(e) => {
            tracing::error!(error = ?e, code = %code, "redirect lookup failed");
            flash_redirect(
                &st.flash_key,
                Flash::error("An error occurred while resolving the URL"),
                "/",
            )
        }
    }
}
