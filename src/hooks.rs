//! Request hook run in front of every route.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::models::Locals;

/// Authentication happens in the browser: the server performs no checks or
/// redirects and every request starts out anonymous.
pub async fn handle(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(Locals { user: None });
    next.run(request).await
}
