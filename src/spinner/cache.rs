use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::query::ItemQuery;
use crate::models::Item;
use crate::reactive::{Observable, Readable};
use crate::source::ItemSource;
use crate::utils::log_throttle::LogThrottle;

const SKIP_LOG_WINDOW: Duration = Duration::from_secs(30);

/// A snapshot of everything the cache holds.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CacheState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: String,
    pub loaded_once: bool,
}

/// How the cache-hit short-circuit treats a successful but empty result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// When false, an empty list is refetched on the next non-forced refresh,
    /// so "no active items" is indistinguishable from "not loaded yet".
    pub cache_empty_results: bool,
}

/// Lazily fetched, observable list of active spinner items.
///
/// Two states: idle and loading. `refresh` moves idle to loading only when
/// neither guard short-circuits, and always returns to idle once the fetch
/// settles, whatever its outcome.
pub struct ItemListCache {
    source: Arc<dyn ItemSource>,
    query: ItemQuery,
    policy: CachePolicy,
    items: Observable<Vec<Item>>,
    loading: Observable<bool>,
    error: Observable<String>,
    loaded_once: AtomicBool,
    /// Serializes guard evaluation with the idle -> loading transition.
    gate: Mutex<()>,
    skip_log: LogThrottle,
}

/// Resets `loading` when dropped, so a failed, panicking or cancelled fetch
/// never leaves the cache stuck in the loading state.
struct LoadingGuard<'a> {
    loading: &'a Observable<bool>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}

impl ItemListCache {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self::with_state(source, CacheState::default())
    }

    /// Creates a cache seeded with `state`.
    pub fn with_state(source: Arc<dyn ItemSource>, state: CacheState) -> Self {
        ItemListCache {
            source,
            query: ItemQuery::active_by_label(),
            policy: CachePolicy::default(),
            items: Observable::new(state.items),
            loading: Observable::new(state.loading),
            error: Observable::new(state.error),
            loaded_once: AtomicBool::new(state.loaded_once),
            gate: Mutex::new(()),
            skip_log: LogThrottle::new(SKIP_LOG_WINDOW),
        }
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn items(&self) -> Readable<Vec<Item>> {
        self.items.readable()
    }

    pub fn loading(&self) -> Readable<bool> {
        self.loading.readable()
    }

    pub fn error(&self) -> Readable<String> {
        self.error.readable()
    }

    pub fn loaded_once(&self) -> bool {
        self.loaded_once.load(Ordering::Acquire)
    }

    pub fn state(&self) -> CacheState {
        CacheState {
            items: self.items.get(),
            loading: self.loading.get(),
            error: self.error.get(),
            loaded_once: self.loaded_once(),
        }
    }

    /// Fetches the active items unless a fetch is already running or the cache
    /// already holds a loaded list (`force` skips the latter check).
    ///
    /// Never fails: a fetch error is recorded in the `error` container and the
    /// previous items are kept.
    pub async fn refresh(&self, force: bool) {
        let Some(_loading) = self.begin(force) else {
            return;
        };
        self.error.set(String::new());

        debug!(
            event_name = "spinner.refresh.start",
            event_domain = "spinner",
            source = self.source.name(),
            force,
            "fetching spinner items"
        );

        match self.source.fetch(&self.query).await {
            Ok(items) => {
                info!(
                    event_name = "spinner.refresh.success",
                    event_domain = "spinner",
                    source = self.source.name(),
                    item_count = items.len(),
                    "spinner items loaded"
                );
                self.items.set(items);
                self.loaded_once.store(true, Ordering::Release);
            }
            Err(failure) => {
                warn!(
                    event_name = "spinner.refresh.failure",
                    event_domain = "spinner",
                    source = self.source.name(),
                    error = %failure,
                    "failed to load spinner items"
                );
                self.error.set(failure.to_string());
            }
        }
    }

    /// Evaluates both guards and, if neither short-circuits, enters the loading
    /// state. Returns the guard that leaves it again.
    fn begin(&self, force: bool) -> Option<LoadingGuard<'_>> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        if self.loading.get() {
            if let Some(suppressed_count) = self.skip_log.should_emit("spinner.refresh.busy") {
                debug!(
                    event_name = "spinner.refresh.busy",
                    event_domain = "spinner",
                    suppressed_count,
                    "refresh skipped, a fetch is already in flight"
                );
            }
            return None;
        }

        let has_items =
            self.policy.cache_empty_results || self.items.with(|items| !items.is_empty());
        if self.loaded_once() && !force && has_items {
            if let Some(suppressed_count) = self.skip_log.should_emit("spinner.cache.hit") {
                debug!(
                    event_name = "spinner.cache.hit",
                    event_domain = "spinner",
                    suppressed_count,
                    "spinner items served from cache"
                );
            }
            return None;
        }

        self.loading.set(true);
        Some(LoadingGuard {
            loading: &self.loading,
        })
    }
}
