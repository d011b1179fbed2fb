//! Travel Agent Server Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use travel_agent_agent::TravelAgent;
use travel_agent_config::{Settings, SynonymConfig};
use travel_agent_dataset::{load_store, DestinationStore};
use travel_agent_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Travel Agent Server v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::var("TRAVEL_AGENT_CONFIG").ok();
    let settings = Settings::load_or_default(config_path.as_deref());
    tracing::info!(
        config_path = config_path.as_deref().unwrap_or("built-in defaults"),
        "Configuration loaded"
    );

    let synonyms = Arc::new(load_synonyms(&settings));
    let store = Arc::new(load_dataset(&settings, &synonyms));
    if store.is_empty() {
        tracing::warn!("dataset is empty; the agent will answer with a data-unavailable message");
    } else {
        tracing::info!(destinations = store.len(), "dataset ready");
    }

    let agent = TravelAgent::new(Arc::clone(&store), synonyms);
    let state = AppState::new(settings.clone(), store, agent);

    spawn_session_sweeper(&state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let app = create_router(state);

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_synonyms(settings: &Settings) -> SynonymConfig {
    match settings.data.synonyms_path.as_deref() {
        Some(path) => match SynonymConfig::load(path) {
            Ok(config) => {
                tracing::info!(path, "loaded synonym tables");
                config
            }
            Err(e) => {
                tracing::warn!("failed to load synonym tables ({e}); using built-ins");
                SynonymConfig::default()
            }
        },
        None => SynonymConfig::default(),
    }
}

fn load_dataset(settings: &Settings, synonyms: &SynonymConfig) -> DestinationStore {
    match load_store(
        &settings.data.destinations_path,
        &settings.data.pois_path,
        synonyms,
    ) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to load dataset ({e}); starting with no destinations");
            DestinationStore::default()
        }
    }
}

fn spawn_session_sweeper(state: &AppState) {
    let sessions = Arc::clone(&state.sessions);
    let interval = Duration::from_secs(60);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            sessions.sweep();
        }
    });
}
