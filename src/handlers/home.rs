//! Home page: the input form plus any pending flash message.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::flash::{self, Flash};
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    flash: Option<Flash>,
}

/// `GET /` - renders the form. A pending flash message is shown once and
/// its cookie cleared with the same response; there are no side effects
/// beyond that.
pub async fn home_handler(State(st): State<AppState>, headers: HeaderMap) -> Response {
    let flash = flash::from_headers(&headers, &st.flash_key);
    let consumed = flash.is_some();

    let mut response = IndexTemplate { flash }.into_response();

    if consumed {
        if let Ok(clear) = HeaderValue::from_str(&flash::clear_cookie()) {
            response.headers_mut().append(header::SET_COOKIE, clear);
        }
    }

    response
}
