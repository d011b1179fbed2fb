//! Error Types
//!
//! The conversational failure classes of the turn pipeline. Every variant is
//! converted into a user-facing reply by the agent facade; none of them
//! escapes `handle_turn`.

use thiserror::Error;

/// Travel agent error type
#[derive(Debug, Error)]
pub enum Error {
    /// Input was blank or whitespace-only; no extraction was attempted
    #[error("empty input")]
    InputEmpty,

    /// The linguistic analyzer could not be invoked
    #[error("linguistic analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// No destination rows are loaded
    #[error("destination dataset is empty")]
    DatasetEmpty,

    /// A lookup by id or name matched no destination row
    #[error("location not found: {0}")]
    LocationNotFound(String),
}

/// Result alias for travel agent operations
pub type Result<T> = std::result::Result<T, Error>;
