//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: default_bind_address(), port: default_port() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_upload_bytes: default_max_upload_bytes() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    bind_address: String,
    port: u16,
    max_upload_bytes: usize,
    config_file: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        Ok(Self::from_toml(toml_config, path.display().to_string()))
    }

    /// Load configuration from the given path, falling back to the
    /// CONFIG_FILE environment variable and finally to built-in defaults.
    pub fn load_from_path(path: &str) -> Self {
        let path = env::var("CONFIG_FILE").unwrap_or_else(|_| path.to_string());
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "config_load_failed_using_defaults");
                Self::default()
            }
        }
    }

    fn from_toml(toml_config: TomlConfig, config_file: String) -> Self {
        Self {
            bind_address: toml_config.server.bind_address,
            port: toml_config.server.port,
            max_upload_bytes: toml_config.limits.max_upload_bytes,
            config_file,
        }
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "<defaults>".to_string())
    }
}
