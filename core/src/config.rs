use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Environment variable holding an inline YAML configuration.
pub const CONFIG_ENV: &str = "GREETER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Query-string key whose value is greeted.
    pub query_parameter: String,
    /// Name greeted when the query parameter is missing or empty.
    pub fallback_name: String,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            query_parameter: "Name".to_string(),
            fallback_name: "World".to_string(),
            log_filter: "greeter_core=info,bootstrap=info".to_string(),
        }
    }
}

/// Loads from `config_path` when given, otherwise from `GREETER_CONFIG`,
/// otherwise the defaults. The result is validated.
pub fn load_config(config_path: Option<&str>) -> Result<GreeterConfig> {
    let config = match config_path {
        Some(path) => GreeterConfig::from_file(path)?,
        None if std::env::var_os(CONFIG_ENV).is_some() => GreeterConfig::from_env()?,
        None => GreeterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

impl GreeterConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_env() -> Result<Self> {
        let config_str = std::env::var(CONFIG_ENV).map_err(|_| ConfigError::MissingVariable {
            name: CONFIG_ENV.to_string(),
        })?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: GreeterConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.query_parameter.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "query_parameter cannot be empty".to_string(),
            });
        }
        if self.fallback_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "fallback_name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
