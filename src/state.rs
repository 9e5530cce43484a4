//! Shared application state.

use crate::spinner::ItemListCache;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide spinner item cache.
    pub spinner: Arc<ItemListCache>,
}
