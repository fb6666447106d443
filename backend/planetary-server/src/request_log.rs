use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Logs `METHOD path -> status (ms)` for every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({}ms)",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );

    response
}
