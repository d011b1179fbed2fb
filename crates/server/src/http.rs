//! HTTP Endpoints
//!
//! REST API over the agent facade. The conversational endpoints never fail
//! on user input; HTTP errors are reserved for malformed requests and
//! unknown lookups.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use travel_agent_agent::LocationButton;
use travel_agent_core::PointOfInterest;

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.settings.server.cors_origins);

    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/location_details", post(location_details))
        .route("/api/reset_session", post(reset_session))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build the CORS layer from the configured origins
///
/// An empty list means same-origin only: no cross-origin headers are
/// emitted at all.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    tracing::info!(origins = parsed.len(), "CORS configured");
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// The user's message for this turn
    message: String,
    /// Session to continue; absent, unknown or expired ids start a new one
    #[serde(default)]
    session_id: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    locations: Vec<LocationButton>,
    session_id: String,
}

/// One conversational turn
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let session = state.sessions.get_or_create(request.session_id.as_deref());

    let reply = {
        let mut context = session.context.lock();
        state.agent.handle_turn(&request.message, &mut context)
    };

    Json(ChatResponse {
        response: reply.reply,
        locations: reply.locations,
        session_id: session.id.clone(),
    })
}

/// Location details request
#[derive(Debug, Deserialize)]
struct LocationDetailsRequest {
    /// Destination name, or its numeric id as a string
    location_name: String,
}

/// Location details response
#[derive(Debug, Serialize)]
struct LocationDetailsResponse {
    name: String,
    description: String,
    points_of_interest: Vec<PointOfInterest>,
}

/// Description and POIs for one destination
async fn location_details(
    State(state): State<AppState>,
    Json(request): Json<LocationDetailsRequest>,
) -> Result<Json<LocationDetailsResponse>, ServerError> {
    let key = request.location_name.trim();
    if key.is_empty() {
        return Err(ServerError::InvalidRequest(
            "missing 'location_name' in request".into(),
        ));
    }

    let row = match key.parse::<u32>() {
        Ok(id) => state.store.get(id),
        Err(_) => state.store.find_by_name(key),
    }
    .ok_or_else(|| ServerError::LocationNotFound(key.to_string()))?;

    Ok(Json(LocationDetailsResponse {
        name: row.name.clone(),
        description: row.description(),
        points_of_interest: row.pois.clone(),
    }))
}

/// Reset request
#[derive(Debug, Deserialize)]
struct ResetRequest {
    session_id: String,
}

/// Clear a session's conversation context
///
/// Unknown ids are a no-op: the client's next chat turn starts fresh either
/// way.
async fn reset_session(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Json<serde_json::Value> {
    if let Some(session) = state.sessions.get(&request.session_id) {
        session.context.lock().reset();
        tracing::info!(session_id = %request.session_id, "session context reset");
    }
    Json(serde_json::json!({ "status": "ok" }))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let destinations = state.store.len();
    let status = if destinations > 0 { "ok" } else { "degraded" };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": status,
            "destinations": destinations,
            "active_sessions": state.sessions.len(),
        })),
    )
}
