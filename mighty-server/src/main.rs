use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mighty_server::{config::Config, create_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Mighty Calculator score service...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST {:?}", config.host))?;

    info!(
        "Body limit {} bytes, at most {} games per request",
        config.max_body_bytes, config.max_games_per_request
    );

    let routes = create_routes(Arc::new(config.clone()));

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown((host, config.port), shutdown_signal())
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!("Server started successfully on {}. Press Ctrl+C to stop.", addr);
    server.await;
    info!("Server shutdown complete.");

    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl+c: {}", e);
                }
                return;
            }
        };

        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
        }
        info!("Received Ctrl+C, shutting down gracefully...");
    }
}
