//! Shop configuration.
//!
//! Loaded from TOML: actor mailbox size, log filter, admin listing defaults
//! and the catalog to seed. [`ShopConfig::load`] reads the file named by
//! `ESHOP_CONFIG` and falls back to the bundled `config/default.toml`.

use crate::domain::Good;
use crate::order_actor::OrderQuery;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ESHOP_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error that occurs during file I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error that occurs when parsing TOML configuration.
    #[error("Configuration error: {0}")]
    Parse(String),
    /// Error that occurs when configuration validation fails.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub actors: ActorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    /// Goods to seed the catalog with.
    #[serde(default)]
    pub catalog: Vec<Good>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActorConfig {
    /// Mailbox capacity of every resource actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    32
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Defaults for the admin order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default)]
    pub filter: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_number")]
    pub page_number: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            filter: String::new(),
            page_size: default_page_size(),
            page_number: default_page_number(),
        }
    }
}

fn default_sort() -> String {
    "default".to_string()
}

fn default_page_size() -> usize {
    25
}

fn default_page_number() -> usize {
    1
}

impl ListingConfig {
    pub fn query(&self) -> Result<OrderQuery, ConfigError> {
        OrderQuery::new(&self.sort, self.filter.clone(), self.page_size, self.page_number)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

impl ShopConfig {
    /// Loads the file named by `ESHOP_CONFIG`, or the bundled defaults.
    pub async fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path).await,
            Err(_) => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration:
    /// - mailbox size is positive
    /// - the listing sort is known
    /// - catalog ids are unique
    /// - no two goods share a title and price
    fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Validation("actors.buffer_size must be positive".into()));
        }

        self.listing.query()?;

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for good in &self.catalog {
            if good.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!("Good {} has an empty title", good.id)));
            }
            if !ids.insert(good.id) {
                return Err(ConfigError::Validation(format!("Duplicate good id {}", good.id)));
            }
            if !keys.insert((good.title.clone(), good.price.normalize())) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate good '{}' at price {}",
                    good.title, good.price
                )));
            }
        }
        Ok(())
    }
}
