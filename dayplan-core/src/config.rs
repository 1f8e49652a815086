//! Global configuration at ~/.config/dayplan/config.toml
//!
//! Shared by the server and CLI so both operate on the same data
//! directory. Missing file means defaults; a malformed file is an error.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{PlannerError, PlannerResult};

const DEFAULT_PORT: u16 = 5000;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("dayplan"))
        .unwrap_or_else(|| PathBuf::from(".dayplan"))
}

/// Global configuration shared by the server and CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Root of the document store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Port the HTTP server binds on localhost.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
            port: DEFAULT_PORT,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".to_string()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, falling back to defaults when the file does
    /// not exist.
    pub fn load() -> PlannerResult<GlobalConfig> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|err| {
            PlannerError::Config(format!("Invalid config file {}: {}", path.display(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.data_dir.ends_with("dayplan") || config.data_dir == PathBuf::from(".dayplan"));
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: GlobalConfig = toml::from_str(
            r#"
            data_dir = "/tmp/dayplan-test"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dayplan-test"));
        assert_eq!(config.port, 8080);
    }
}
