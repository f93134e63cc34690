//! Web server setup and configuration

use crate::{middleware::request_logging, routes::build_routes, state::AppState};
use axum::{Router, middleware};
use std::{sync::Arc, time::Duration};
use talkeriq_core::Config;
use tower_http::timeout::TimeoutLayer;

/// Build the complete web application with all routes and state
pub fn build_app(config: Config) -> Router {
    build_app_with_state(AppState::new(config))
}

/// Build the application around prepared state
pub fn build_app_with_state(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout);

    build_routes()
        .with_state(Arc::new(state))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(request_logging))
}
