//! Server configuration
//!
//! Defaults overridden by `HBNB_*` environment variables.

use config::{Config, ConfigError, Source};
use serde::Deserialize;

/// Deployment flavour; picks the default log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Development | Environment::Testing => "debug",
            Environment::Production => "info",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub environment: Environment,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::with_prefix("HBNB"))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("environment", "development")?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("HBNB").source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_source(env(&[])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.environment.default_log_level(), "debug");
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::from_source(env(&[
            ("HBNB_BIND_ADDRESS", "127.0.0.1:8080"),
            ("HBNB_ENVIRONMENT", "production"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.environment.default_log_level(), "info");
    }

    #[test]
    fn test_unknown_environment_rejected() {
        assert!(ServerConfig::from_source(env(&[("HBNB_ENVIRONMENT", "staging")])).is_err());
    }
}
