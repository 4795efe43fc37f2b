mod aggregator;
mod config;
mod errors;
mod models;
mod routes;
mod scorer;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::aggregator::JobAggregator;
use crate::config::Config;
use crate::routes::build_router;
use crate::scorer::provider::select_provider;
use crate::scorer::FitScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; missing API keys are fine, the pipelines
    // degrade to their mock paths.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Select the language-model provider (OpenAI first, then Anthropic)
    let provider = select_provider(&config);

    // Build the two pipeline coordinators; read-only after this point
    let aggregator = Arc::new(JobAggregator::new(&config)?);
    let scorer = Arc::new(FitScorer::new(&config, provider)?);

    let state = AppState {
        aggregator,
        scorer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
