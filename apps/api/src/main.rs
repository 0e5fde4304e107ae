mod company;
mod comparison;
mod config;
mod errors;
mod leads;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::company::analyzer::LlmCompanyAnalyzer;
use crate::company::resolver::CompanyResolver;
use crate::company::store::MemoryStore;
use crate::config::Config;
use crate::leads::webhook::LeadWebhook;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Workbrand API v{}", env!("CARGO_PKG_VERSION"));

    // Company store (file-mirrored when COMPANY_DB_PATH is set)
    let store = match &config.company_db_path {
        Some(path) => MemoryStore::load(path.clone()).await,
        None => {
            info!("COMPANY_DB_PATH not set; company store is in-memory only");
            MemoryStore::new()
        }
    };
    if config.purge_on_start {
        match store.purge_generated().await {
            Ok(removed) => info!("Purged {} generated companies: {:?}", removed.len(), removed),
            Err(e) => error!("Failed to purge generated companies: {e}"),
        }
    }
    let store = Arc::new(store);

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let analyzer = Arc::new(LlmCompanyAnalyzer::new(llm));
    let resolver = Arc::new(CompanyResolver::new(store.clone(), analyzer));

    let leads = LeadWebhook::new(config.sheet_webhook_url.clone());
    if !leads.is_configured() {
        info!("GOOGLE_SHEET_WEBHOOK_URL not set; lead submissions will only be logged");
    }

    // Build app state
    let state = AppState {
        resolver,
        store,
        leads,
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
