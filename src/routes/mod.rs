//! HTTP route definitions and handlers.
//!
//! Routes are grouped by concern: the spinner item cache, the page session
//! and health checks. Every route runs behind the request hook.

mod health_routes;
mod session_routes;
mod spinner_routes;

use crate::hooks;
use crate::state::AppState;
use axum::{middleware, Router};

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(spinner_routes::routes())
        .merge(session_routes::routes())
        .merge(health_routes::routes())
        .layer(middleware::from_fn(hooks::handle))
        .with_state(state)
}
