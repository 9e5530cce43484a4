//! The spinner item cache.
//!
//! Holds the active spinner items in observable containers and refreshes them
//! from an [`ItemSource`](crate::source::ItemSource) at most one fetch at a time.

pub mod cache;
pub mod error;
pub mod query;

pub use cache::{CachePolicy, CacheState, ItemListCache};
pub use error::FetchFailure;
pub use query::{ItemColumn, ItemQuery};
