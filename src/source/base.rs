use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{memory_source::MemorySource, supabase_source::SupabaseSource};
use crate::config::{ConfigV1, SourceConfig};
use crate::models::Item;
use crate::spinner::{FetchFailure, ItemQuery};
use crate::supabase::{ClientError, SupabaseClient};

/// A remote tabular data source that can answer filtered, ordered item queries.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// A descriptive name for logs.
    fn name(&self) -> &str;

    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, FetchFailure>;
}

/// Creates the item source selected by `spinner.source`.
/// The Supabase source fails here when its credentials are missing.
pub fn create_source(config: &ConfigV1) -> Result<Arc<dyn ItemSource>, ClientError> {
    match &config.spinner.source {
        SourceConfig::Supabase(source_config) => {
            let client = SupabaseClient::new(&config.supabase)?;
            info!(
                "Using Supabase item source, table '{}' at {}",
                source_config.table,
                client.rest_url()
            );
            Ok(Arc::new(SupabaseSource::new(client, &source_config.table)))
        }
        SourceConfig::Memory(memory_config) => {
            info!(
                "Using in-memory item source with {} rows",
                memory_config.items.len()
            );
            Ok(Arc::new(MemorySource::new(memory_config.items.clone())))
        }
    }
}
