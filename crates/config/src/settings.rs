//! Runtime Settings
//!
//! Server and data-path settings, YAML-loadable with compiled-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Settings load errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}: {1}")]
    FileNotFound(String, String),
    #[error("failed to parse settings: {0}")]
    ParseError(String),
}

/// Top-level runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            data: DataSettings::default(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Idle session lifetime in seconds
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Allowed CORS origins; empty means same-origin only
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
            cors_origins: Vec::new(),
        }
    }
}

/// Dataset file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Destinations CSV
    #[serde(default = "default_destinations_path")]
    pub destinations_path: String,
    /// Points-of-interest CSV; missing file degrades to empty POI lists
    #[serde(default = "default_pois_path")]
    pub pois_path: String,
    /// Optional synonym config YAML; absent means built-in tables
    #[serde(default)]
    pub synonyms_path: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            destinations_path: default_destinations_path(),
            pois_path: default_pois_path(),
            synonyms_path: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_session_ttl_secs() -> u64 {
    1800
}

fn default_destinations_path() -> String {
    "data/destinations.csv".to_string()
}

fn default_pois_path() -> String {
    "data/points_of_interest.csv".to_string()
}

impl Settings {
    /// Load from a YAML file; absent fields fall back to the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        serde_yaml::from_str(&content).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    /// Load from the given path, or fall back to defaults when absent
    pub fn load_or_default(path: Option<&str>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to load settings ({e}), using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5001);
        assert_eq!(settings.server.session_ttl_secs, 1800);
        assert!(settings.data.synonyms_path.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 8080\n").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let settings = Settings::load_or_default(Some("/nonexistent/settings.yaml"));
        assert_eq!(settings.server.port, 5001);
    }
}
