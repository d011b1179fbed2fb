//! Travel Agent Server
//!
//! The HTTP edge of the travel agent: an axum router over the agent facade,
//! plus in-memory session management mapping session ids onto conversation
//! contexts.

pub mod http;
pub mod session;
pub mod state;

pub use http::create_router;
pub use session::{Session, SessionManager};
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("Details not found for location '{0}'. It might not be in my database.")]
    LocationNotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::SessionNotFound(_) | ServerError::LocationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
