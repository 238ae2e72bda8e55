use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::{
    load_config, validate_config, Discovery, OmdbClient, TmdbClient,
};

use marquee_server::api::create_router;
use marquee_server::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MARQUEE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully (marquee v{})", VERSION);
    info!("Discovery locale: {}", config.discovery.locale);

    // Create catalog gateway client
    let catalog = Arc::new(
        TmdbClient::new(config.catalog.clone()).context("Failed to create catalog client")?,
    );
    info!("Catalog client initialized");

    // Create ratings client if configured
    let ratings = match &config.ratings {
        Some(ratings_config) => match OmdbClient::new(ratings_config.clone()) {
            Ok(client) => {
                info!("Ratings client initialized");
                Some(client)
            }
            Err(e) => {
                error!("Failed to create ratings client: {}", e);
                None
            }
        },
        None => {
            info!("Ratings gateway not configured");
            None
        }
    };

    // Create discovery service
    let discovery = Discovery::new(catalog, config.discovery.clone());

    // Genre taxonomies are process-lifetime constants; fetch them up front
    discovery.warm_genre_cache().await;
    info!("Genre cache warmed");

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), discovery, ratings));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
