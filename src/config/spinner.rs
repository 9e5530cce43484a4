use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Item;

fn default_table() -> String {
    "spinner_items".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for the spinner item cache.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SpinnerConfig {
    pub source: SourceConfig,
    /// Treat a successful empty result as loaded instead of refetching it.
    #[serde(default)]
    pub cache_empty_results: bool,
    /// Warm the cache in the background once the server is up.
    #[serde(default = "default_true")]
    pub refresh_on_startup: bool,
}

/// Where spinner items come from, selected by a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(tag = "type")]
pub enum SourceConfig {
    #[serde(rename = "supabase")]
    Supabase(SupabaseSourceConfig),
    #[serde(rename = "memory")]
    Memory(MemorySourceConfig),
}

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SupabaseSourceConfig {
    #[serde(default = "default_table")]
    pub table: String,
}

/// Fixed rows served without any network access.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct MemorySourceConfig {
    #[serde(default)]
    pub items: Vec<Item>,
}
