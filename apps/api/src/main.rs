mod articles;
mod config;
mod errors;
mod headline;
mod llm_client;
mod models;
mod routes;
mod seo;
mod state;
mod store;
mod suggestions;
mod vision;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::InMemoryArticleStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ContentForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client. Without a key every generation endpoint
    // serves deterministic mock data, which keeps local development keyless.
    let llm = match config.gemini_api_key.clone() {
        Some(api_key) => {
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            Some(GeminiClient::new(api_key))
        }
        None => {
            info!("GEMINI_API_KEY not set, generation endpoints will serve mock data");
            None
        }
    };

    // Initialize the article history store (in-memory by default)
    let store = Arc::new(InMemoryArticleStore::default());

    // Build app state
    let state = AppState { llm, store };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
