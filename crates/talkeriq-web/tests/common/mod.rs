//! Shared helpers for the HTTP-level tests

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use async_trait::async_trait;
use std::sync::{Arc, Once};
use std::time::Duration;
use talkeriq_core::{
    Authenticator, Config, DashboardSnapshot, FixtureSource, KnowledgeItem, MockAuthenticator,
    PhoneNumber, RecordSource, VoiceAgent, fixtures,
};
use talkeriq_web::{AppState, build_app_with_state};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// App over the fixtures with an authenticator that answers immediately
pub fn test_app() -> Router {
    app_with(Config::default(), MockAuthenticator::with_delay(Duration::ZERO))
}

/// App over the fixtures with the given config and authenticator
pub fn app_with(config: Config, authenticator: MockAuthenticator) -> Router {
    init_test_logging();

    let authenticator: Arc<dyn Authenticator> = Arc::new(authenticator);
    let state = AppState::with_parts(config, Arc::new(FixtureSource::new()), authenticator);
    build_app_with_state(state)
}

/// App over `source` with an authenticator that answers immediately
pub fn app_over(source: Arc<dyn RecordSource>) -> Router {
    init_test_logging();

    let authenticator: Arc<dyn Authenticator> =
        Arc::new(MockAuthenticator::with_delay(Duration::ZERO));
    let state = AppState::with_parts(Config::default(), source, authenticator);
    build_app_with_state(state)
}

/// Account with no records yet
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

#[async_trait]
impl RecordSource for EmptySource {
    async fn phone_numbers(&self) -> talkeriq_core::Result<Vec<PhoneNumber>> {
        Ok(Vec::new())
    }

    async fn voice_agents(&self) -> talkeriq_core::Result<Vec<VoiceAgent>> {
        Ok(Vec::new())
    }

    async fn knowledge_items(&self) -> talkeriq_core::Result<Vec<KnowledgeItem>> {
        Ok(Vec::new())
    }

    async fn dashboard(&self) -> talkeriq_core::Result<DashboardSnapshot> {
        Ok(fixtures::dashboard().clone())
    }

    fn name(&self) -> &str {
        "empty"
    }
}

/// Response pieces the assertions look at
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Drive one request through the router
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// GET `uri` on a fresh app
pub async fn get(uri: &str) -> TestResponse {
    get_from(test_app(), uri).await
}

/// GET `uri` on `app`
pub async fn get_from(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// POST an url-encoded form to `uri` on `app`
pub async fn post_form(app: Router, uri: &str, form: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}
