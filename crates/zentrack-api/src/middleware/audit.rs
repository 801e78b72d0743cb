use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request audit middleware.
///
/// Emits one structured event per request with its latency. Client and
/// server errors are raised to `warn` so rejected assessment operations
/// stand out in the log stream.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "api_request rejected"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "api_request"
        );
    }

    response
}
