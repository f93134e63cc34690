//! Sign-in boundary
//!
//! The login form talks to an [`Authenticator`]. Until an identity provider is
//! wired in, [`MockAuthenticator`] accepts any non-empty email and password
//! after a short simulated round trip.

use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Email and password as submitted by the login form
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Account password
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Create credentials from raw form values
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in email
    pub email: String,
}

/// Checks credentials against an identity provider
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt to sign in
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the credentials are rejected.
    async fn login(&self, credentials: &Credentials) -> Result<Session>;
}

/// Accepts any complete pair of credentials after a fixed delay
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    delay: Duration,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }
}

impl MockAuthenticator {
    /// Create an authenticator that answers after `delay`
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulated round-trip time
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!(delay = ?self.delay, "Simulating login round trip");
        tokio::time::sleep(self.delay).await;

        if !credentials.is_complete() {
            return Err(Error::Authentication(
                "email and password are required".to_string(),
            ));
        }

        Ok(Session {
            email: credentials.email.trim().to_string(),
        })
    }
}

/// Run a login attempt, giving up after `limit`
///
/// # Errors
///
/// Returns [`Error::Timeout`] if the authenticator does not answer in time,
/// or whatever the authenticator itself returns.
pub async fn login_with_timeout(
    authenticator: &Arc<dyn Authenticator>,
    credentials: &Credentials,
    limit: Duration,
) -> Result<Session> {
    match tokio::time::timeout(limit, authenticator.login(credentials)).await {
        Ok(Ok(session)) => {
            info!(email = %session.email, "Login succeeded");
            Ok(session)
        }
        Ok(Err(e)) => {
            warn!(email = %credentials.email, error = %e, "Login rejected");
            Err(e)
        }
        Err(_) => {
            let duration_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            warn!(duration_ms, "Login timed out");
            Err(Error::Timeout { duration_ms })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn instant() -> Arc<dyn Authenticator> {
        Arc::new(MockAuthenticator::with_delay(Duration::ZERO))
    }

    #[tokio::test]
    async fn test_complete_credentials_sign_in() {
        let session = instant()
            .login(&Credentials::new(" ops@talkeriq.test ", "hunter2"))
            .await
            .unwrap();

        assert_eq!(session.email, "ops@talkeriq.test");
    }

    #[rstest]
    #[case("", "secret")]
    #[case("   ", "secret")]
    #[case("ops@talkeriq.test", "")]
    #[case("", "")]
    #[tokio::test]
    async fn test_incomplete_credentials_rejected(#[case] email: &str, #[case] password: &str) {
        let result = instant().login(&Credentials::new(email, password)).await;

        assert!(matches!(result, Err(Error::Authentication(_))));
    }

    #[tokio::test]
    async fn test_slow_authenticator_times_out() {
        let slow: Arc<dyn Authenticator> =
            Arc::new(MockAuthenticator::with_delay(Duration::from_secs(10)));

        let result = login_with_timeout(
            &slow,
            &Credentials::new("ops@talkeriq.test", "hunter2"),
            Duration::from_millis(20),
        )
        .await;

        match result {
            Err(Error::Timeout { duration_ms }) => assert_eq!(duration_ms, 20),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_within_limit() {
        let result = login_with_timeout(
            &instant(),
            &Credentials::new("ops@talkeriq.test", "hunter2"),
            Duration::from_secs(1),
        )
        .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.c", "hunter2"));

        assert!(rendered.contains("a@b.c"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(MockAuthenticator::default().delay(), Duration::from_secs(1));
    }
}
