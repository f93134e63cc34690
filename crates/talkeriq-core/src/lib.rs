//! Core records, filtering and metrics for the TalkerIQ dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod metrics;
pub mod navigation;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use auth::{Authenticator, Credentials, MockAuthenticator, Session};
pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use filter::{ListQuery, Searchable};
pub use metrics::{AgentStats, KnowledgeStats, PhoneNumberStats};
pub use store::{FixtureSource, Listing, RecordSource};
pub use types::{DashboardSnapshot, KnowledgeItem, PhoneNumber, VoiceAgent};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if config.format == "json" {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        subscriber.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}
