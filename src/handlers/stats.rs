//! Stats page: every mapping with its click count, newest first.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::{AppError, map_sqlx_error};
use crate::state::AppState;
use crate::storage::UrlRecord;

#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    rows: Vec<UrlRecord>,
}

/// `GET /stats` - read-only listing ordered newest-created first.
pub async fn stats_handler(State(st): State<AppState>) -> Result<StatsTemplate, AppError> {
    let rows = st.store.list_all().await.map_err(map_sqlx_error)?;
    Ok(StatsTemplate { rows })
}
