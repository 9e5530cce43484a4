//! Supabase client factory.
//!
//! Builds an HTTP client for the project's REST API, authenticated with the
//! anon key. No session is kept: every request carries the same key.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Url};
use thiserror::Error;
use tracing::debug;

use crate::config::SupabaseConfig;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing VITE_SUPABASE_URL or VITE_SUPABASE_ANON_KEY")]
    MissingCredentials,
    #[error("Invalid Supabase URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Supabase anon key is not a valid header value")]
    InvalidKey,
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// A client for `{url}/rest/v1`.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    rest_url: Url,
    http: reqwest::Client,
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, ClientError> {
        let (url, anon_key) = match (required(&config.url), required(&config.anon_key)) {
            (Some(url), Some(anon_key)) => (url, anon_key),
            _ => return Err(ClientError::MissingCredentials),
        };

        let rest_url = Url::parse(&format!("{}/rest/v1/", url.trim_end_matches('/')))
            .map_err(|e| ClientError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        if rest_url.cannot_be_a_base() || !matches!(rest_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: url.to_string(),
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(anon_key).map_err(|_| ClientError::InvalidKey)?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key))
            .map_err(|_| ClientError::InvalidKey)?;
        bearer.set_sensitive(true);
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(ms) = config.timeout_in_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build()?;

        debug!("Supabase client created for {}", rest_url);
        Ok(SupabaseClient { rest_url, http })
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// A GET request against `table`; the caller adds the query parameters.
    pub fn from(&self, table: &str) -> RequestBuilder {
        self.http.get(format!("{}{}", self.rest_url, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>, anon_key: Option<&str>) -> SupabaseConfig {
        SupabaseConfig {
            url: url.map(str::to_string),
            anon_key: anon_key.map(str::to_string),
            timeout_in_ms: Some(5_000),
        }
    }

    #[test]
    fn missing_values_are_rejected() {
        for (url, key) in [
            (None, Some("anon")),
            (Some("https://project.supabase.co"), None),
            (Some(""), Some("anon")),
            (Some("https://project.supabase.co"), Some("  ")),
        ] {
            let err = SupabaseClient::new(&config(url, key)).unwrap_err();
            assert!(matches!(err, ClientError::MissingCredentials));
            assert_eq!(
                err.to_string(),
                "Missing VITE_SUPABASE_URL or VITE_SUPABASE_ANON_KEY"
            );
        }
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = SupabaseClient::new(&config(Some("not a url"), Some("anon"))).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));

        let err =
            SupabaseClient::new(&config(Some("ftp://files.example"), Some("anon"))).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn rest_url_is_derived_from_project_url() {
        let settings = config(Some("https://project.supabase.co/"), Some("anon"));
        let client = SupabaseClient::new(&settings).unwrap();
        assert_eq!(client.rest_url().as_str(), "https://project.supabase.co/rest/v1/");
    }
}
