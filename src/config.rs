//! Server configuration
//!
//! Settings resolve in layers, later layers winning:
//!
//! 1. Built-in defaults (`0.0.0.0:3000`)
//! 2. A TOML file (`--config <path>`, or the global config if it exists)
//! 3. The `PORT` environment variable
//! 4. Command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Name of the environment variable that overrides the port
pub const PORT_ENV: &str = "PORT";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ServerConfig`]
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Port value is not a number in 0..=65535
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load from `explicit` if given (it must exist), otherwise from the
    /// global config file when present, otherwise defaults. The global file
    /// is skipped when no config or home directory is known.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match paths::global_config() {
            Some(global) if global.is_file() => {
                log::debug!("loading config from {}", global.display());
                Self::from_file(&global)
            },
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply a `PORT`-style override. `None` or a blank value leaves the port unchanged.
    pub fn with_port_var(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.port = raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        }
        Ok(self)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` string suitable for binding
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
