//! Page session data.

use axum::{routing::get, Json, Router};

use crate::models::{Locals, PageData};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/session", get(session))
}

/// Hands the page whatever user the hook attached, which is always nobody.
async fn session(locals: Locals) -> Json<PageData> {
    Json(PageData::from(locals))
}
