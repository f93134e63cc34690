//! Route definitions for the web interface

use crate::{
    handlers::{api, assets, auth, pages},
    pages::{dashboard, knowledge_base, phone_numbers, voice_agents},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use talkeriq_core::navigation::LOGIN_PATH;
use tower_http::compression::CompressionLayer;

/// Server-rendered pages and their form posts
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(dashboard::PATH, get(pages::dashboard))
        .route(
            phone_numbers::PATH,
            get(pages::phone_numbers).post(pages::submit_phone_number),
        )
        .route(
            voice_agents::PATH,
            get(pages::voice_agents).post(pages::submit_voice_agent),
        )
        .route(
            knowledge_base::PATH,
            get(pages::knowledge_base).post(pages::submit_knowledge),
        )
        .route(LOGIN_PATH, get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/assets/app.css", get(assets::stylesheet))
}

/// JSON endpoints
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/phone-numbers", get(api::api_phone_numbers))
        .route("/api/voice-agents", get(api::api_voice_agents))
        .route("/api/knowledge-base", get(api::api_knowledge_base))
        .route("/api/dashboard", get(api::api_dashboard))
        .route("/api/navigation", get(api::api_navigation))
        .layer(CompressionLayer::new())
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(api::health_check))
}

/// Build the complete web application router
///
/// Paths without a route fall through to [`pages::fallback`], which handles
/// the root redirect, placeholder sections and 404s.
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(page_routes())
        .merge(api_routes())
        .merge(health_routes())
        .fallback(pages::fallback)
}
