//! Configuration management for the TalkerIQ dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Login configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Login configuration
///
/// There is no identity provider behind the login form yet; these settings
/// drive the simulated round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated login latency in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Upper bound on a login attempt in milliseconds
    #[serde(default = "default_login_timeout_ms")]
    pub login_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_login_delay_ms() -> u64 {
    1000
}

const fn default_login_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            login_timeout_ms: default_login_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `talkeriq.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::build(config::File::with_name("talkeriq").required(false))
    }

    /// Load configuration from an explicit file, still honouring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or the result cannot be parsed.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> crate::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("TALKERIQ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that would make the server unusable
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::validation("server.port", "must be non-zero"));
        }
        if self.server.request_timeout == 0 {
            return Err(crate::Error::validation(
                "server.request_timeout",
                "must be non-zero",
            ));
        }
        if self.auth.login_timeout_ms == 0 {
            return Err(crate::Error::validation(
                "auth.login_timeout_ms",
                "must be non-zero",
            ));
        }
        // A slow login must hit its own timeout before the request timeout does.
        let login_budget_ms = self
            .auth
            .login_timeout_ms
            .saturating_add(self.auth.login_delay_ms);
        if self.server.request_timeout.saturating_mul(1000) <= login_budget_ms {
            return Err(crate::Error::validation(
                "server.request_timeout",
                format!(
                    "must exceed auth.login_timeout_ms + auth.login_delay_ms ({login_budget_ms}ms)"
                ),
            ));
        }
        if !matches!(self.logging.format.as_str(), "json" | "text") {
            return Err(crate::Error::validation(
                "logging.format",
                format!("expected json or text, got {}", self.logging.format),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout, 30);
        assert_eq!(config.auth.login_delay_ms, 1000);
        assert_eq!(config.auth.login_timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "server": {"host": "127.0.0.1"},
            "auth": {"login_delay_ms": 10}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.login_delay_ms, 10);
        assert_eq!(config.auth.login_timeout_ms, 5000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "yaml".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.auth.login_timeout_ms = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_request_timeout() {
        let mut config = Config::default();
        config.server.request_timeout = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.request_timeout"));
    }

    #[test]
    fn test_validate_rejects_request_timeout_inside_login_budget() {
        let mut config = Config::default();
        config.server.request_timeout = 1;
        config.auth.login_timeout_ms = 5000;
        config.auth.login_delay_ms = 3000;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.request_timeout"));
        assert!(err.to_string().contains("8000ms"));
    }

    #[test]
    fn test_validate_accepts_request_timeout_past_login_budget() {
        let mut config = Config::default();
        config.server.request_timeout = 9;
        config.auth.login_timeout_ms = 5000;
        config.auth.login_delay_ms = 3000;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_rejects_short_request_timeout() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nrequest_timeout = 2\n\n[auth]\nlogin_timeout_ms = 5000").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(crate::Error::Validation { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[logging]\nformat = \"text\"\nlevel = \"debug\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = Config::load_from(Path::new("/nonexistent/talkeriq.toml"));
        assert!(matches!(result, Err(crate::Error::Configuration { .. })));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.auth.login_delay_ms, config.auth.login_delay_ms);
    }
}
