//! Application configuration.
//!
//! Loaded once at startup from the process environment (and `.env` when
//! present). Missing optional values fall back to defaults; malformed values
//! are reported instead of silently replaced.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ListCatalog;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Directory holding one `{list}.json` per option list.
    pub data_dir: PathBuf,
    /// Allowed list names.
    pub lists: ListCatalog,
    /// Max wait for the per-list append lock.
    pub lock_timeout: Duration,
    /// Rolling log file directory.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: "0.0.0.0".to_string(),
            app_port: 3000,
            data_dir: PathBuf::from("data"),
            lists: ListCatalog::default(),
            lock_timeout: Duration::from_millis(2000),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST`: Server host (default: "0.0.0.0")
    /// - `PORT`: Server port (default: 3000)
    /// - `DATA_DIR`: List file directory (default: "data")
    /// - `OPTION_LISTS`: Comma-separated allowed list names (default: "category,type,area")
    /// - `LIST_LOCK_TIMEOUT_MS`: Append lock wait in milliseconds (default: 2000)
    /// - `LOG_DIR`: Rolling log directory (default: "logs")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let app_port = match get("PORT") {
            Some(raw) => parse_number(&raw, "PORT")?,
            None => defaults.app_port,
        };

        let lock_timeout = match get("LIST_LOCK_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse_number(&raw, "LIST_LOCK_TIMEOUT_MS")?),
            None => defaults.lock_timeout,
        };

        let lists = match get("OPTION_LISTS") {
            Some(raw) => parse_lists(&raw)?,
            None => defaults.lists,
        };

        Ok(Self {
            app_host: get("APP_HOST").unwrap_or(defaults.app_host),
            app_port,
            data_dir: get("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            lists,
            lock_timeout,
            log_dir: get("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, key: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn parse_lists(raw: &str) -> Result<ListCatalog, ConfigError> {
    let names: Vec<&str> = raw.split(',').map(str::trim).filter(|n| !n.is_empty()).collect();

    if let Some(bad) = names
        .iter()
        .find(|n| !n.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'))
    {
        return Err(ConfigError::InvalidValue {
            key: "OPTION_LISTS".to_string(),
            message: format!("list name '{bad}' may only contain letters, digits, '_' and '-'"),
        });
    }

    let catalog = ListCatalog::new(names);
    if catalog.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "OPTION_LISTS".to_string(),
            message: "at least one list name is required".to_string(),
        });
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATA_DIR", "/srv/lists"),
            ("OPTION_LISTS", "category, audience ,"),
            ("LIST_LOCK_TIMEOUT_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.app_port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/lists"));
        assert_eq!(
            config.lists.names().collect::<Vec<_>>(),
            vec!["category", "audience"]
        );
        assert_eq!(config.lock_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "PORT"));
    }

    #[test]
    fn test_list_names_must_be_plain() {
        assert!(config_from(&[("OPTION_LISTS", "area,../etc")]).is_err());
        assert!(config_from(&[("OPTION_LISTS", " , ")]).is_err());
    }
}
