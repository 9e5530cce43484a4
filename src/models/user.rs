use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// A signed-in user. Authentication happens in the browser, so the server only
/// ever carries this as an optional, unverified value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

/// Per-request values set by the request hook.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Locals {
    pub user: Option<User>,
}

/// Data handed to a page on load.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageData {
    pub session: Option<User>,
}

impl From<Locals> for PageData {
    fn from(locals: Locals) -> Self {
        PageData {
            session: locals.user,
        }
    }
}

/// Extractor: reads the `Locals` the hook stored in the request extensions.
/// Requests that bypassed the hook are treated as anonymous.
#[async_trait]
impl<S> FromRequestParts<S> for Locals
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Locals>().cloned().unwrap_or_default())
    }
}
