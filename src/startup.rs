//! Application startup and server initialization.
//!
//! Builds the item source and the spinner cache from the configuration, then
//! serves the router.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::source::create_source;
use crate::spinner::{CachePolicy, ItemListCache};
use crate::state::AppState;
use crate::supabase::ClientError;

/// Creates the shared state. Fails when the configured source cannot be built,
/// e.g. when the Supabase credentials are missing.
pub fn build_state(config: &ConfigV1) -> Result<AppState, ClientError> {
    let source = create_source(config)?;
    let spinner = ItemListCache::new(source).with_policy(CachePolicy {
        cache_empty_results: config.spinner.cache_empty_results,
    });

    Ok(AppState {
        spinner: Arc::new(spinner),
    })
}

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if the item source cannot be created, the server fails to
/// bind to the configured address, or serving fails.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;

    if config.spinner.refresh_on_startup {
        let spinner = state.spinner.clone();
        tokio::spawn(async move { spinner.refresh(false).await });
    }

    info!("Starting server on {}", config.bind_address);

    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
