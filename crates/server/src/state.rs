//! Application State
//!
//! Shared state across all handlers: the settings, the loaded dataset, the
//! agent facade and the session registry. Everything here is built once at
//! startup and only read afterwards.

use std::sync::Arc;
use std::time::Duration;

use travel_agent_agent::TravelAgent;
use travel_agent_config::Settings;
use travel_agent_dataset::DestinationStore;

use crate::session::SessionManager;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings
    pub settings: Arc<Settings>,
    /// The loaded destination dataset
    pub store: Arc<DestinationStore>,
    /// The conversational agent
    pub agent: Arc<TravelAgent>,
    /// Live sessions
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    /// Build the application state around a ready agent
    pub fn new(settings: Settings, store: Arc<DestinationStore>, agent: TravelAgent) -> Self {
        let ttl = Duration::from_secs(settings.server.session_ttl_secs);
        Self {
            settings: Arc::new(settings),
            store,
            agent: Arc::new(agent),
            sessions: Arc::new(SessionManager::new(ttl)),
        }
    }
}
