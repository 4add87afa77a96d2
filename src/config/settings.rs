// src/config/settings.rs
//
// Client settings: where the service lives and what may be uploaded

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Label shown when no file is selected
pub const DEFAULT_PLACEHOLDER: &str = "Click to upload or drag and drop";

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid server url: {0}")]
    ServerUrl(String),
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the detection service
    pub server_url: String,
    /// Path of the upload endpoint
    pub detect_path: String,
    /// Path of the health probe
    pub health_path: String,
    /// Extensions accepted for upload (lowercase, no dot)
    pub allowed_extensions: Vec<String>,
    /// Upload size limit in bytes (None disables the check)
    pub max_upload_bytes: Option<u64>,
    /// Text shown in the file label with nothing selected
    pub placeholder_label: String,
    /// Request timeout in seconds (None keeps the transport default)
    pub timeout_secs: Option<u64>,
    /// Honour HTTP(S)_PROXY from the environment
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            detect_path: "/detect".to_string(),
            health_path: "/health".to_string(),
            allowed_extensions: ["wav", "mp3", "flac", "ogg", "m4a"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_upload_bytes: Some(16 * 1024 * 1024),
            placeholder_label: DEFAULT_PLACEHOLDER.to_string(),
            timeout_secs: None,
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Default config file location (`<config dir>/voicecheckr/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voicecheckr").join("config.json"))
    }

    /// Load a config file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else from the default location if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => {
                    log::debug!("Loading config from {}", path.display());
                    Self::from_file(&path)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::ServerUrl(self.server_url.clone()));
        }
        Ok(())
    }

    /// Full URL of the upload endpoint
    pub fn detect_url(&self) -> String {
        join_url(&self.server_url, &self.detect_path)
    }

    /// Full URL of the health probe
    pub fn health_url(&self) -> String {
        join_url(&self.server_url, &self.health_path)
    }

    pub fn is_extension_allowed(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
