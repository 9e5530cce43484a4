use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::spinner::SpinnerConfig;
use super::supabase::SupabaseConfig;

pub const CONFIG_PATH: &str = "./config.yaml";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub bind_address: String,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    pub spinner: SpinnerConfig,
}

/// The figment behind `load_config`: the YAML file, then the Supabase
/// environment variables on top (`VITE_SUPABASE_URL` -> `supabase.url`).
pub fn figment_for(path: &str) -> Figment {
    Figment::new().merge(Yaml::file(path)).merge(
        Env::prefixed("VITE_SUPABASE_").map(|key| format!("supabase.{}", key.as_str()).into()),
    )
}

pub fn extract(figment: &Figment) -> Result<ConfigV1, figment::Error> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
    // handle configuration migration between versions here when necessary
}

/// Load config from "config.yaml" in the current directory plus the environment.
pub fn load_config() -> Result<ConfigV1, figment::Error> {
    extract(&figment_for(CONFIG_PATH))
}

/// Render the JSON schema for the configuration.
pub fn schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Config))
}
