use async_trait::async_trait;
use tracing::debug;

use super::ItemSource;
use crate::models::Item;
use crate::spinner::{FetchFailure, ItemQuery};
use crate::supabase::SupabaseClient;

/// Reads spinner items from a Supabase table through its REST API.
pub struct SupabaseSource {
    client: SupabaseClient,
    table: String,
    name: String,
}

impl SupabaseSource {
    pub fn new(client: SupabaseClient, table: &str) -> Self {
        SupabaseSource {
            client,
            table: table.to_string(),
            name: format!("supabase:{}", table),
        }
    }
}

#[async_trait]
impl ItemSource for SupabaseSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, FetchFailure> {
        let params = query.to_params();
        debug!("Querying Supabase table '{}' with {:?}", self.table, params);

        let response = self.client.from(&self.table).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchFailure::from_error_body(status.as_u16(), &body));
        }

        // A null payload means "no rows".
        let rows: Option<Vec<Item>> = serde_json::from_str(&body)
            .map_err(|e| FetchFailure::Decode(format!("Error parsing JSON: {}", e)))?;
        Ok(rows.unwrap_or_default())
    }
}
