//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or the file named by `MULTIDESK_CONFIG`) and includes:
//! - Base URL of the ticket service
//! - Request timeout
//! - Display time zone

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

pub const CONFIG_PATH_ENV: &str = "MULTIDESK_CONFIG";
pub const API_URL_ENV: &str = "MULTIDESK_API_URL";

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &["api_url", "request_timeout", "timezone"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// IANA time zone used for displayed timestamps; system zone when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            timezone: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "multidesk")
        .ok_or_else(|| DeskError::Config("could not determine home directory".to_string()))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Directory for the dashboard log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            DeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    /// Apply `MULTIDESK_API_URL`, then the command-line flag on top of it
    pub fn apply_overrides(&mut self, api_url_flag: Option<&str>) {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            self.api_url = url;
        }
        if let Some(url) = api_url_flag {
            self.api_url = url.to_string();
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Time zone for displayed timestamps
    pub fn timezone(&self) -> Result<TimeZone> {
        match self.timezone.as_deref() {
            Some(name) => TimeZone::get(name)
                .map_err(|e| DeskError::Config(format!("invalid timezone '{}': {}", name, e))),
            None => Ok(TimeZone::system()),
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            "timezone" => Ok(self.timezone.clone().unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                url::Url::parse(value)?;
                self.api_url = value.to_string();
            }
            "request_timeout" => {
                self.request_timeout = value.parse().map_err(|_| {
                    DeskError::Config(format!("request_timeout must be a number, got '{}'", value))
                })?;
            }
            "timezone" => {
                if value.is_empty() {
                    self.timezone = None;
                } else {
                    TimeZone::get(value).map_err(|e| {
                        DeskError::Config(format!("invalid timezone '{}': {}", value, e))
                    })?;
                    self.timezone = Some(value.to_string());
                }
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> DeskError {
    DeskError::Config(format!(
        "unknown config key '{}', expected one of: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
