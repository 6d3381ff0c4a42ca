use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::models::WeightVector;

const APP_NAME: &str = "wsjf";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 17020;

/// Server settings and the weights a new session starts from.
///
/// Read from `<config_dir>/wsjf/config.json`. Missing keys take their
/// defaults; command-line flags and `WSJF_*` variables override the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Interface the HTTP API binds to
    pub host: String,
    /// Port for the HTTP API
    pub port: u16,
    /// Initial weight vector for new sessions
    pub weights: WeightVector,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            weights: WeightVector::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the defaults; an unreadable file, malformed
    /// JSON or out-of-range weights are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Self = serde_json::from_str(&content).context("Failed to parse config file")?;

        config
            .weights
            .validate()
            .context("Invalid weights in config file")?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply command-line (or environment) overrides on top of the file values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
