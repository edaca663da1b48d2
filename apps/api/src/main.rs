mod chat;
mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::resume::loader::ResumeLoader;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Chat v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the resume once; it is never reloaded
    let loader = ResumeLoader::new(&config.resume_pdf_path, &config.resume_txt_path);
    let resume = tokio::task::spawn_blocking(move || loader.load())
        .await
        .context("Resume loader task panicked")?;
    if !resume.is_available() {
        warn!("Serving without a resume: every answer will see the error text instead");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        llm: Arc::new(llm),
        resume: Arc::new(resume),
    };

    let app = build_router(state, &config.static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origin)?);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
