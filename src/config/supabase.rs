use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Endpoint and anon key of the Supabase project.
///
/// Both values normally come from `VITE_SUPABASE_URL` and
/// `VITE_SUPABASE_ANON_KEY`; they are optional here so that a missing value is
/// reported by the client factory rather than by the config parser.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    /// Transport timeout for requests to the REST API.
    pub timeout_in_ms: Option<u64>,
}
