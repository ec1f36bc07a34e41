//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Span, debug_span, info};

/// Logs request method, path, status, and duration.
///
/// Only the route path is logged; share codes in `/api/shared/{code}`
/// are replaced so live codes stay out of the logs.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redact_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}

/// Span for `TraceLayer`, carrying the redacted path instead of the full URI.
pub fn request_span(request: &Request) -> Span {
    debug_span!(
        "request",
        method = %request.method(),
        path = %redact_path(request.uri().path()),
        version = ?request.version(),
    )
}

fn redact_path(path: &str) -> String {
    match path.strip_prefix("/api/shared/") {
        Some(code) if !code.is_empty() => "/api/shared/{code}".to_string(),
        _ => path.to_string(),
    }
}
