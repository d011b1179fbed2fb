//! Core traits and types for the travel agent
//!
//! This crate provides foundational types used across all other crates:
//! - Conversation context and intent tags
//! - Destination records and recommendation results
//! - The linguistic analyzer seam
//! - The sampler seam for injectable randomness
//! - Error types

pub mod analyzer;
pub mod context;
pub mod destination;
pub mod error;
pub mod result;
pub mod sampler;

pub use analyzer::{LinguisticAnalyzer, Token};
pub use context::{ConversationContext, Intent};
pub use destination::{Destination, DestinationSummary, PointOfInterest};
pub use error::{Error, Result};
pub use result::{MissingSlot, Recommendation};
pub use sampler::{RandomSampler, Sampler, TakeFirstSampler};
