use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;

use crate::models::sort_key::SortKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid listing.default_sort '{0}', options are: {}", SortKey::choices())]
    InvalidDefaultSort(String),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ConfigError::Io(_) => ErrorCode::CONFIG_READ_FAILED,
            ConfigError::Yaml(_) => ErrorCode::CONFIG_PARSE_FAILED,
            ConfigError::InvalidDefaultSort(_) => ErrorCode::CONFIG_INVALID_DEFAULT_SORT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_otlp_endpoint")]
    pub otlp_endpoint: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub excluded_modules: Vec<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: default_service_name(),
            otlp_endpoint: default_otlp_endpoint(),
            log_level: default_log_level(),
            excluded_modules: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Applied when a request does not name a sort key.
    #[serde(default)]
    pub default_sort: Option<String>,
    /// Where container namespaces are read from.
    #[serde(default = "default_proc_root")]
    pub proc_root: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: None,
            proc_root: default_proc_root(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file: File = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(default_sort) = &self.listing.default_sort {
            default_sort
                .parse::<SortKey>()
                .map_err(|_| ConfigError::InvalidDefaultSort(default_sort.clone()))?;
        }
        Ok(())
    }
}

fn default_service_name() -> String {
    "container-ps".to_string()
}

fn default_otlp_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_proc_root() -> String {
    "/proc".to_string()
}
