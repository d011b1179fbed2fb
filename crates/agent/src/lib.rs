//! Conversational core of the travel agent
//!
//! Wires the extractor, the recommendation filter and the response composer
//! behind the `TravelAgent` facade. The facade's operations are total:
//! every failure class becomes a conversational reply, nothing propagates
//! to callers.

pub mod composer;
pub mod filter;
mod travel_agent;

pub use composer::{compose, LocationButton, TurnReply};
pub use filter::RecommendationFilter;
pub use travel_agent::TravelAgent;
