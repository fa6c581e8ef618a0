// Main entry point for the activity roster server

use anyhow::{Context, Result};
use roster_core::domains::activities::{seed, RosterStore};
use roster_core::server::{build_app, shutdown::shutdown_signal};
use roster_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mergington High School activities API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Seed the roster
    let roster = match &config.roster_seed_path {
        Some(path) => seed::load_roster(path)
            .with_context(|| format!("Failed to load roster seed from {}", path.display()))?,
        None => seed::default_roster(),
    };
    tracing::info!(activities = roster.len(), "Roster initialized");

    let app = build_app(RosterStore::new(roster));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Front-end: http://localhost:{}/", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
