//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/shopstock/config.toml)
//! 3. Environment variables (SHOPSTOCK_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::DEFAULT_LOW_STOCK_THRESHOLD;

/// Environment variable prefix
const ENV_PREFIX: &str = "SHOPSTOCK";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the product document
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Stock level at or below which a product appears in alerts
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (SHOPSTOCK_DATA_DIR, SHOPSTOCK_LOW_STOCK_THRESHOLD)
    /// 2. Config file (~/.config/shopstock/config.toml or SHOPSTOCK_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // SHOPSTOCK_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // SHOPSTOCK_LOW_STOCK_THRESHOLD
        if let Ok(val) = std::env::var(format!("{}_LOW_STOCK_THRESHOLD", ENV_PREFIX)) {
            if let Ok(threshold) = val.parse() {
                self.low_stock_threshold = threshold;
            }
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with the SHOPSTOCK_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shopstock")
            .join("config.toml")
    }

    /// Get the path to the product document
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shopstock")
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}
