use async_trait::async_trait;

use super::ItemSource;
use crate::models::Item;
use crate::spinner::{FetchFailure, ItemQuery};

/// Serves a fixed set of rows, applying the query in memory.
pub struct MemorySource {
    rows: Vec<Item>,
}

impl MemorySource {
    pub fn new(rows: Vec<Item>) -> Self {
        MemorySource { rows }
    }
}

#[async_trait]
impl ItemSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, FetchFailure> {
        Ok(query.apply(&self.rows))
    }
}
