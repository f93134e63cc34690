//! Application state management

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use talkeriq_core::{Authenticator, Config, FixtureSource, MockAuthenticator, RecordSource};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Records behind the list pages
    pub source: Arc<dyn RecordSource>,
    /// Login backend
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Create state backed by the demo fixtures and the mock login
    pub fn new(config: Config) -> Self {
        let authenticator =
            MockAuthenticator::with_delay(Duration::from_millis(config.auth.login_delay_ms));

        Self::with_parts(config, Arc::new(FixtureSource::new()), Arc::new(authenticator))
    }

    /// Create state from explicit parts
    pub fn with_parts(
        config: Config,
        source: Arc<dyn RecordSource>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            config,
            source,
            authenticator,
        }
    }

    /// Upper bound on one login attempt
    #[must_use]
    pub const fn login_timeout(&self) -> Duration {
        Duration::from_millis(self.config.auth.login_timeout_ms)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}
