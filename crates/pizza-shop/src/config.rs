//! # Shop Configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then `PIZZA_SHOP_*`
//! environment variables.
//!
//! ```toml
//! shop_name = "Syzygy"
//! base_price = 1050.0
//! max_quantity = 10
//! splash_tick_ms = 50
//! auto_confirm = false
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the config file for the binary.
pub const CONFIG_PATH_VAR: &str = "PIZZA_SHOP_CONFIG";

const ENV_PREFIX: &str = "PIZZA_SHOP_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shown in the mediator's forwarding notice as "<shop_name> App".
    pub shop_name: String,
    /// Price of a pizza before toppings.
    pub base_price: f64,
    /// Largest quantity a cart row accepts.
    pub max_quantity: u8,
    /// Interval between startup progress ticks.
    pub splash_tick_ms: u64,
    /// Answer yes to every confirmation prompt.
    pub auto_confirm: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "Syzygy".to_string(),
            base_price: 1050.0,
            max_quantity: 10,
            splash_tick_ms: 50,
            auto_confirm: false,
        }
    }
}

impl ShopConfig {
    pub fn splash_tick(&self) -> Duration {
        Duration::from_millis(self.splash_tick_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::Invalid(
                "max_quantity must be at least 1".to_string(),
            ));
        }
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "base_price must be a non-negative amount, got {}",
                self.base_price
            )));
        }
        Ok(())
    }
}

/// Defaults, then `path`, then `PIZZA_SHOP_*` variables.
pub fn load_config(path: impl AsRef<Path>) -> Result<ShopConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: ShopConfig = Figment::from(Serialized::defaults(ShopConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]))
        .extract()?;
    config.validate()?;

    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Defaults overlaid with `PIZZA_SHOP_*` variables only.
pub fn load_from_env() -> Result<ShopConfig, ConfigError> {
    let config: ShopConfig = Figment::from(Serialized::defaults(ShopConfig::default()))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]))
        .extract()?;
    config.validate()?;
    Ok(config)
}

/// Parses a TOML document; missing keys keep their defaults.
pub fn load_config_from_str(content: &str) -> Result<ShopConfig, ConfigError> {
    let config: ShopConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = load_config_from_str("shop_name = \"Corner\"\nmax_quantity = 4\n").unwrap();

        assert_eq!(config.shop_name, "Corner");
        assert_eq!(config.max_quantity, 4);
        assert_eq!(config.base_price, 1050.0);
        assert!(!config.auto_confirm);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let err = load_config_from_str("max_quantity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = load_config_from_str("base_price = \"cheap\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_price = 900.0\nsplash_tick_ms = 0\nauto_confirm = true").unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.base_price, 900.0);
        assert_eq!(config.splash_tick(), Duration::ZERO);
        assert!(config.auto_confirm);
        assert_eq!(config.shop_name, "Syzygy");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
