//! Points API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable            | Default   | Meaning                         |
//! |---------------------|-----------|---------------------------------|
//! | `POINTS_BIND_ADDR`  | `0.0.0.0` | Interface to listen on          |
//! | `POINTS_PORT`       | `80`      | TCP port                        |
//! | `POINTS_LOG_FORMAT` | `pretty`  | `pretty` or `json` log lines    |
//!
//! `RUST_LOG` controls log filtering as usual.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Points API configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Log output layout
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 80,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let bind_addr = lookup("POINTS_BIND_ADDR").unwrap_or(defaults.bind_addr);
        if bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("POINTS_BIND_ADDR".to_string()));
        }

        let port = match lookup("POINTS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_PORT".to_string()))?,
            None => defaults.port,
        };

        let log_format = match lookup("POINTS_LOG_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_LOG_FORMAT".to_string()))?,
            None => defaults.log_format,
        };

        Ok(ServerConfig {
            bind_addr,
            port,
            log_format,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:80");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("POINTS_BIND_ADDR", "127.0.0.1"),
            ("POINTS_PORT", "8080"),
            ("POINTS_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[("POINTS_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for POINTS_PORT");

        let err =
            ServerConfig::from_lookup(lookup(&[("POINTS_LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for POINTS_LOG_FORMAT");

        assert!(ServerConfig::from_lookup(lookup(&[("POINTS_BIND_ADDR", " ")])).is_err());
    }
}
