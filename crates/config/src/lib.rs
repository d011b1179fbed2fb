//! Configuration for the travel agent
//!
//! Two concerns live here:
//! - `synonyms`: the four canonical-label synonym tables driving intent
//!   detection and filtering, plus the loading-time alias maps applied to
//!   raw dataset labels
//! - `settings`: server/runtime settings
//!
//! Everything is serde-driven, YAML-loadable, and ships with compiled-in
//! defaults so the system runs with no config files present.

pub mod settings;
pub mod synonyms;

pub use settings::{Settings, SettingsError};
pub use synonyms::{SynonymConfig, SynonymConfigError, SynonymTable};
