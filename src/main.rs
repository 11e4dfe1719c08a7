//! PropelMe backend server entry point

use clap::Parser;
use propelme::api::{ApiServer, ApiServerConfig, AppState};
use propelme::services::{EventbriteClient, LlmConfig, LlmService};
use propelme::{Settings, SqliteStorage, StorageBackend};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "propelme", about = "Personal networking assistant backend", version)]
struct Cli {
    /// Address to bind, overrides PROPELME_BIND_ADDR
    #[arg(long)]
    bind: Option<String>,

    /// Database URL, overrides PROPELME_DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(bind) = cli.bind {
        settings.bind_addr = bind;
    }
    if let Some(url) = cli.database_url {
        settings.database_url = url;
    }

    info!("Starting {} ({})", settings.app_name, settings.environment);

    let storage = SqliteStorage::new(&settings.database_url).await?;
    storage.init_schema().await?;
    let storage: Arc<dyn StorageBackend> = Arc::new(storage);

    let llm = if settings.has_gemini() {
        let config = LlmConfig {
            api_key: settings.gemini_api_key.clone().unwrap_or_default(),
            model: settings.gemini_model.clone(),
            ..LlmConfig::default()
        };
        Some(Arc::new(LlmService::new(config)?))
    } else {
        warn!("Gemini API key not set; AI endpoints disabled");
        None
    };

    let events = if settings.has_eventbrite() {
        Some(Arc::new(EventbriteClient::new(
            settings.eventbrite_api_key.clone().unwrap_or_default(),
        )?))
    } else {
        warn!("Eventbrite API key not set; event endpoints disabled");
        None
    };

    let state = AppState {
        storage,
        llm,
        events,
    };

    let addr: SocketAddr = settings.bind_addr.parse()?;
    let server = ApiServer::new(ApiServerConfig { addr }, state);
    server.serve().await
}
