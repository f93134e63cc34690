//! Web server for the TalkerIQ dashboard
#![forbid(unsafe_code)]

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use talkeriq_core::{Config, Error, init_logging};
use talkeriq_web::build_app;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Command line interface for the dashboard server
#[derive(Debug, Parser)]
#[command(
    name = "talkeriq-web",
    version = env!("CARGO_PKG_VERSION"),
    about = "Server-rendered admin dashboard for TalkerIQ voice agents"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "TALKERIQ_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind, overriding the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    init_logging(&config.logging)?;

    let host: IpAddr = config.server.host.parse().map_err(|e| Error::Configuration {
        message: format!("Invalid host '{}': {e}", config.server.host),
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    let app = build_app(config);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "TalkerIQ dashboard listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received terminate signal, shutting down gracefully"),
    }
}
