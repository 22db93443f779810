//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or a path given with `--config`) and includes:
//! - OMDb endpoint and API key
//! - Request and connect timeouts
//! - Location of the favorites file
//!
//! `OMDB_API_KEY` and `OMDB_BASE_URL` take precedence over the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};
use crate::remote::omdb::DEFAULT_BASE_URL;

pub const API_KEY_ENV: &str = "OMDB_API_KEY";
pub const BASE_URL_ENV: &str = "OMDB_BASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OMDb endpoint and credentials
    #[serde(default)]
    pub omdb: OmdbConfig,

    /// Total time allowed for one remote request, in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Time allowed to establish a connection, in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Favorites file; defaults to `favorites.json` in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_path: Option<PathBuf>,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb: OmdbConfig::default(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            favorites_path: None,
        }
    }
}

/// OMDb endpoint configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

impl fmt::Debug for OmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "marquee", "marquee")
        .ok_or_else(|| MarqueeError::Config("cannot determine home directory".to_string()))
}

fn io_context(e: std::io::Error, action: &str, path: &Path) -> MarqueeError {
    MarqueeError::Io(std::io::Error::new(
        e.kind(),
        format!("Failed to {action} at {}: {e}", path.display()),
    ))
}

impl Config {
    /// Get the default path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| io_context(e, "read config", path))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| io_context(e, "create directory for config", parent))?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| io_context(e, "write config", path))?;

        // The file holds the API key; owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions)
                .map_err(|e| io_context(e, "set permissions on config", path))?;
        }

        Ok(())
    }

    /// Get the OMDb API key from environment variable or config
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            return Some(key);
        }

        self.omdb.api_key.clone().filter(|k| !k.is_empty())
    }

    /// Get the OMDb base URL from environment variable or config
    pub fn base_url(&self) -> String {
        if let Ok(url) = env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.omdb.base_url.clone()
    }

    /// Set the OMDb API key
    pub fn set_api_key(&mut self, api_key: String) {
        self.omdb.api_key = Some(api_key);
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Resolve the favorites file location
    pub fn favorites_path(&self) -> Result<PathBuf> {
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("favorites.json")),
        }
    }
}
