//! One log line per request: status, duration, body size, method and path

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::format::group_thousands;

pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} | {:>5}ms | {:>12} | {} {}: {}",
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                "error",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = group_thousands(&bytes.len().to_string(), '.');
    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!(
            "{} | {:>5}ms | {:>12} | {} {}",
            parts.status.as_u16(),
            elapsed,
            size,
            method,
            uri.path()
        );
    } else {
        tracing::warn!(
            "{} | {:>5}ms | {:>12} | {} {}",
            parts.status.as_u16(),
            elapsed,
            size,
            method,
            uri.path()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
