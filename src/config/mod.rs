#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "MINIDROID_SERVICE_CONFIG";

pub const DEFAULT_BUFFER_CAPACITY: usize = 50;
pub const MAX_BUFFER_CAPACITY: usize = 65536;
pub const DEFAULT_LABEL: &str = "Processed: ";
pub const DEFAULT_IDLE_MESSAGE: &str = "Minidroid Native Service. Waiting for input...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub buffer_capacity: usize,
    pub label: String,
    pub idle_message: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            label: DEFAULT_LABEL.to_string(),
            idle_message: DEFAULT_IDLE_MESSAGE.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `MINIDROID_SERVICE_CONFIG`, if any.
    ///
    /// A missing or broken file never stops the service: the problem is
    /// logged and the built-in defaults are used instead.
    pub fn resolve() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %Path::new(&path).display(), "Loaded service configuration");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %Path::new(&path).display(),
                    "Ignoring service configuration: {}",
                    e
                );
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
                Self::default()
            }
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_range("buffer_capacity", self.buffer_capacity, 1, MAX_BUFFER_CAPACITY)?;
        validate_single_line("label", &self.label)?;
        validate_non_empty_string("idle_message", &self.idle_message)?;
        validate_single_line("idle_message", &self.idle_message)?;
        Ok(())
    }
}

impl ConfigProvider for ServiceConfig {
    fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn idle_message(&self) -> &str {
        &self.idle_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ServiceError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_native_service() {
        let config = ServiceConfig::default();
        assert_eq!(config.buffer_capacity, 50);
        assert_eq!(config.label, "Processed: ");
        assert_eq!(
            config.idle_message,
            "Minidroid Native Service. Waiting for input..."
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServiceConfig::from_toml_str("buffer_capacity = 8\n").unwrap();
        assert_eq!(config.buffer_capacity, 8);
        assert_eq!(config.label, DEFAULT_LABEL);
        assert_eq!(config.idle_message, DEFAULT_IDLE_MESSAGE);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = ServiceConfig::from_toml_str("buffer_capacity = 0").unwrap_err();
        match err {
            ServiceError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "buffer_capacity")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_multiline_label_rejected() {
        let err = ServiceConfig::from_toml_str("label = \"a\\nb\"").unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidConfigValueError { ref field, .. } if field == "label"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ServiceConfig::from_toml_str("buffer_capacity = ").unwrap_err();
        assert!(matches!(err, ServiceError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "label = \"Echo: \"").unwrap();
        writeln!(file, "idle_message = \"idle\"").unwrap();

        let config = ServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.label, "Echo: ");
        assert_eq!(config.idle_message, "idle");
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServiceError::IoError(_)));
    }
}
