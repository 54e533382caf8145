use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ServiceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::IoError(_) => {
                "Check that the file exists and is readable, or unset MINIDROID_SERVICE_CONFIG"
            }
            ServiceError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ServiceError::InvalidConfigValueError { .. } => {
                "Adjust the reported field to an accepted value"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
