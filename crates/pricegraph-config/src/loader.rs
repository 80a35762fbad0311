//! Configuration loading utilities

use crate::ReportConfig;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("failed to parse TOML configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("configuration validation failed: {0}")]
    ValidationError(#[from] pricegraph_common::ReportError),
}

impl From<ConfigError> for pricegraph_common::ReportError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            other => pricegraph_common::ReportError::config_with_source(
                "configuration loading failed",
                other,
            ),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: ReportConfig = toml::from_str(&content)?;

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        debug!("Configuration loaded from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from the default locations, falling back to defaults
    pub fn load() -> Result<ReportConfig, ConfigError> {
        let config = if let Ok(config_path) = env::var("PRICEGRAPH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("pricegraph.toml").exists() {
            Self::load_config("pricegraph.toml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut config = ReportConfig::default();
            Self::apply_env_overrides(&mut config);
            config.validate()?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReportConfig, ConfigError> {
        Self::load_config(path)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut ReportConfig) {
        if let Ok(path) = env::var("PRICEGRAPH_INPUT_PATH") {
            config.input.path = path;
        }

        if let Ok(dir) = env::var("PRICEGRAPH_OUTPUT_DIR") {
            config.output.dir = dir;
        }

        if let Ok(level) = env::var("PRICEGRAPH_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[input]
path = "data/prices.csv"

[output]
dir = "out"

[charts.enabled]
histogram = true
grouped_bar = false
scatter = true

[charts.styling]
width = 1024
height = 768

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_config(file.path()).unwrap();
        assert_eq!(config.input.path, "data/prices.csv");
        assert_eq!(config.output.dir, "out");
        assert!(!config.charts.enabled.grouped_bar);
        assert_eq!(config.charts.styling.width, 1024);
        assert_eq!(config.logging.level, "debug");
        // Fields absent from the file keep their defaults
        assert_eq!(config.charts.styling.current_color, "#1f77b4");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = ConfigLoader::load_config("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[charts.styling]
width = 0
"#
        )
        .unwrap();

        let result = ConfigLoader::load_config(file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
