use serde_json::Value;
use thiserror::Error;

use crate::utils::value::value_to_string;

/// Anything that went wrong while fetching items from the remote source.
///
/// `Display` yields the message that ends up in the cache's `error` container.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// A structured error object returned by the data source.
    #[error("{message}")]
    Remote {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<String>,
        hint: Option<String>,
    },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    /// An error payload that is not a structured error (a bare number, text, ...).
    #[error("{}", value_to_string(.0))]
    Opaque(Value),
    /// A non-success response without a usable body.
    #[error("{}", status_line(.0))]
    Status(u16),
}

fn status_line(status: &u16) -> String {
    match reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("HTTP {} {}", status, reason),
        None => format!("HTTP {}", status),
    }
}

impl FetchFailure {
    /// Classifies an error body returned with a non-success status.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        if body.trim().is_empty() {
            return FetchFailure::Status(status);
        }

        let value = match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(_) => return FetchFailure::Opaque(Value::String(body.trim().to_string())),
        };

        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        match text("message") {
            Some(message) => FetchFailure::Remote {
                status,
                message,
                code: text("code"),
                details: text("details"),
                hint: text("hint"),
            },
            None => FetchFailure::Opaque(value),
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchFailure::Decode(e.to_string())
        } else {
            FetchFailure::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_error_reports_its_message() {
        let body = r#"{"message": "timeout", "code": "57014", "details": null, "hint": null}"#;
        let failure = FetchFailure::from_error_body(500, body);
        assert_eq!(failure.to_string(), "timeout");
        match failure {
            FetchFailure::Remote { status, code, .. } => {
                assert_eq!(status, 500);
                assert_eq!(code.as_deref(), Some("57014"));
            }
            other => panic!("expected a remote failure, got {:?}", other),
        }
    }

    #[test]
    fn non_error_values_are_stringified() {
        assert_eq!(FetchFailure::from_error_body(500, "42").to_string(), "42");
        assert_eq!(FetchFailure::Opaque(json!(42)).to_string(), "42");
        assert_eq!(
            FetchFailure::from_error_body(502, "Bad Gateway\n").to_string(),
            "Bad Gateway"
        );
    }

    #[test]
    fn object_without_message_is_opaque() {
        let failure = FetchFailure::from_error_body(400, r#"{"error": "nope"}"#);
        assert_eq!(failure, FetchFailure::Opaque(json!({"error": "nope"})));
    }

    #[test]
    fn empty_body_falls_back_to_the_status() {
        let failure = FetchFailure::from_error_body(502, "");
        assert_eq!(failure, FetchFailure::Status(502));
        assert_eq!(failure.to_string(), "HTTP 502 Bad Gateway");
        assert_eq!(
            FetchFailure::from_error_body(503, " \n").to_string(),
            "HTTP 503 Service Unavailable"
        );
        assert_eq!(FetchFailure::from_error_body(599, "").to_string(), "HTTP 599");
    }
}
