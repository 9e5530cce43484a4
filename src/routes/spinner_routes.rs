//! Spinner item endpoints.
//!
//! Both endpoints answer with the cache contents after the refresh attempt;
//! fetch failures are reported in the `error` field, never as an HTTP error.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::Item;
use crate::spinner::CacheState;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/spinner-items", get(list_items))
        .route("/spinner-items/refresh", post(refresh_items))
}

/// What the page sees: the three observable containers.
#[derive(Serialize, Debug)]
struct SpinnerView {
    items: Vec<Item>,
    loading: bool,
    error: String,
}

impl From<CacheState> for SpinnerView {
    fn from(state: CacheState) -> Self {
        SpinnerView {
            items: state.items,
            loading: state.loading,
            error: state.error,
        }
    }
}

fn default_force() -> bool {
    true
}

#[derive(Deserialize, Debug)]
struct RefreshParams {
    #[serde(default = "default_force")]
    force: bool,
}

/// GET /spinner-items: loads the items on first use, then serves the cache.
async fn list_items(State(state): State<AppState>) -> Json<SpinnerView> {
    state.spinner.refresh(false).await;
    Json(state.spinner.state().into())
}

/// POST /spinner-items/refresh?force=<bool>
async fn refresh_items(
    State(state): State<AppState>,
    Query(params): Query<RefreshParams>,
) -> Json<SpinnerView> {
    info!(force = params.force, "Spinner item refresh requested");
    state.spinner.refresh(params.force).await;
    Json(state.spinner.state().into())
}
