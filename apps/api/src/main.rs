mod archetype;
mod config;
mod errors;
mod llm_client;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::gemini::GeminiProvider;
use crate::llm_client::{ChainLimits, LlmClient};
use crate::portfolio::extract::PdfDocumentParser;
use crate::portfolio::render::build_templates;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    if config.genai_api_key.is_none() {
        warn!("GENAI_API_KEY is not set; portfolio generation will serve fallback content");
    }
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; archetype generation will serve offline content");
    }

    // One HTTP client shared by both providers
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.llm_call_timeout_secs))
        .build()?;

    let limits = ChainLimits::from_secs(
        config.llm_call_timeout_secs,
        config.llm_chain_deadline_secs,
    );

    let portfolio_llm = LlmClient::with_provider(
        Arc::new(GeminiProvider::new(
            http.clone(),
            config.genai_api_key.clone(),
            config.genai_base_url.clone(),
        )),
        &config.portfolio_models,
        limits,
    );
    info!("Portfolio chain: {:?}", portfolio_llm.models());

    let archetype_llm = LlmClient::with_provider(
        Arc::new(GeminiProvider::new(
            http,
            config.gemini_api_key.clone(),
            config.genai_base_url.clone(),
        )),
        &config.archetype_models,
        limits,
    );
    info!("Archetype chain: {:?}", archetype_llm.models());

    let templates = build_templates()?;

    let state = AppState {
        portfolio_llm,
        archetype_llm,
        documents: Arc::new(PdfDocumentParser),
        templates: Arc::new(templates),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
