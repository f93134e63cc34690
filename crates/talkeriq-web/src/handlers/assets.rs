//! Static assets compiled into the binary

use axum::{http::header, response::IntoResponse};

const APP_CSS: &str = include_str!("../../assets/app.css");

/// Site stylesheet
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        APP_CSS,
    )
}
