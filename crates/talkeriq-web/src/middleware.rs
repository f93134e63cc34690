//! Request logging middleware for tracing and monitoring

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, debug, info, warn};

/// Header carrying the request correlation ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Wrap every request in a span and log its outcome
///
/// An incoming `X-Request-ID` is reused; otherwise a fresh one is generated.
/// The ID is echoed back on the response.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(generate_request_id, String::from);

    let span = tracing::info_span!(
        "request",
        method = %method,
        uri = %uri,
        request_id = %request_id,
    );

    async move {
        debug!("Starting request processing");

        let mut response = next.run(request).await;
        let elapsed = start_time.elapsed();
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            warn!(status = %status, elapsed = ?elapsed, "Request completed with error");
        } else {
            info!(status = %status, elapsed = ?elapsed, "Request completed successfully");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }

        response
    }
    .instrument(span)
    .await
}

/// Generate a unique request ID for tracing
fn generate_request_id() -> String {
    format!("req_{}", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware::from_fn, routing::get};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/fail", get(|| async { StatusCode::BAD_REQUEST }))
            .layer(from_fn(request_logging))
    }

    #[test]
    fn test_generate_request_id_format() {
        let id = generate_request_id();

        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), 36);
        assert!(id.trim_start_matches("req_").chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_request_id_uniqueness() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_request_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[tokio::test]
    async fn test_existing_request_id_is_echoed() {
        let request = Request::builder()
            .uri("/ok")
            .header("X-Request-ID", "custom-req-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(&REQUEST_ID_HEADER).unwrap(),
            "custom-req-123"
        );
    }

    #[tokio::test]
    async fn test_request_id_generated_for_errors() {
        let request = Request::builder().uri("/fail").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let id = response.headers().get(&REQUEST_ID_HEADER).unwrap();
        assert!(id.to_str().unwrap().starts_with("req_"));
    }
}
