//! Shakespeare Scenes - HTTP server for searching and reading the plays.

use std::sync::Arc;

use anyhow::Context;
use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use shakespeare_scenes::query::{PgSceneStore, create_pool};
use shakespeare_scenes::{AppState, Config, router};

/// Shakespeare Scenes - search and read the plays.
#[derive(Parser, Debug)]
#[command(name = "shakespeare-scenes")]
#[command(about = "Full-text search and scene pages for Shakespeare's plays", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Connect to the database
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to database")?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");

    let state = AppState::new(config, Arc::new(PgSceneStore::new(pool)));

    // Build router with request tracing
    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "starting http server");

    axum::serve(listener, app).await?;

    Ok(())
}
