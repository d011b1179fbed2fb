//! Destination dataset for the travel agent
//!
//! CSV loading with header validation and label normalization, producing the
//! immutable `DestinationStore` that every session shares. The
//! conversational core only ever sees pre-normalized rows.

pub mod loader;
pub mod store;

pub use loader::{load_store, DatasetError};
pub use store::DestinationStore;
