//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! sensor-config.toml file. It provides a centralized way to configure the service
//! endpoint, API token, and the default query the binary issues.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from sensor-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Service endpoint configuration
    pub api: ApiConfig,
    /// Default query issued by the binary
    pub query: QueryConfig,
}

/// Service endpoint configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the sensor-data service
    pub base_url: String,
    /// API token, forwarded as the `token` query parameter on every request
    pub token: String,
    /// Per-request timeout in seconds (covers connect and read)
    pub timeout_seconds: u64,
}

/// Default query parameters for the binary
#[derive(Debug, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Device code of the target instrument (e.g. "BPR-Folger-59")
    pub device_code: String,
    /// Range start, ISO-8601 (e.g. "2019-11-23T00:00:00.000Z")
    pub date_from: String,
    /// Range end, ISO-8601
    pub date_to: String,
    /// Maximum rows per page; the service decides the exact paging boundary
    pub row_limit: u32,
    /// Whether to follow the pagination cursor and merge every page
    pub all_pages: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: "https://data.oceannetworks.ca/api".to_string(),
                token: String::new(),
                timeout_seconds: 60,
            },
            query: QueryConfig {
                device_code: "BPR-Folger-59".to_string(),
                date_from: "2019-11-23T00:00:00.000Z".to_string(),
                date_to: "2019-11-26T00:00:00.000Z".to_string(),
                row_limit: 100,
                all_pages: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from sensor-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("sensor-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    eprintln!(
                        "Loaded configuration for device: {}",
                        config.query.device_code
                    );
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (BPR-Folger-59)");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration (BPR-Folger-59)");
                Self::default()
            }
        }
    }

    /// Save current configuration to sensor-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("sensor-config.toml", contents)?;
        eprintln!("Configuration saved to sensor-config.toml");
        Ok(())
    }
}
