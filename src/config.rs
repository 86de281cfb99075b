use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain;
use crate::error::{Result, WaybackError};

/// Represents the complete configuration for git-wayback.
///
/// Everything here has a sensible default; the config file only exists
/// to override the cutoff parse layout or turn the scan trace on
/// permanently.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// chrono layout used to parse the wayback time argument
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Print each scanned candidate while searching
    #[serde(default)]
    pub debug: bool,
}

/// Returns the default cutoff parse layout.
fn default_time_format() -> String {
    domain::LAYOUT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_format: default_time_format(),
            debug: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitwayback.toml` in current directory
/// 3. `.gitwayback.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitwayback.toml").exists() {
        fs::read_to_string("./gitwayback.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitwayback.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| WaybackError::config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.time_format, "%Y-%m-%d %H:%M:%S %z");
        assert!(!config.debug);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            time_format = "%Y-%m-%dT%H:%M:%S%z"
            debug = true
            "#,
        )
        .unwrap();
        assert_eq!(config.time_format, "%Y-%m-%dT%H:%M:%S%z");
        assert!(config.debug);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: Config = toml::from_str("debug = true").unwrap();
        assert_eq!(config.time_format, domain::LAYOUT);
        assert!(config.debug);
    }

    #[test]
    fn test_load_config_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "time_format = \"%s\"").unwrap();

        let config = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.time_format, "%s");
    }

    #[test]
    fn test_load_config_missing_custom_path_fails() {
        assert!(load_config(Some("/nonexistent/gitwayback.toml")).is_err());
    }

    #[test]
    fn test_load_config_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "time_format = [not toml").unwrap();

        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
