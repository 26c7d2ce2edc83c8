// file: src/error.rs
// version: 1.0.0
// guid: 3f6b2a91-5c47-4d0e-8a1b-9e2d7c4f0a63

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Raised when no usable Scout key exists for the active environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no scout key configured for environment '{environment}'")]
pub struct MissingKeyError {
    pub environment: String,
}

/// Error types for scout-command
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Missing key: {0}")]
    MissingKey(#[from] MissingKeyError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ScoutError {
    /// Create a new missing key error for an environment
    pub fn missing_key(environment: impl Into<String>) -> Self {
        Self::MissingKey(MissingKeyError {
            environment: environment.into(),
        })
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for every invalid-argument failure, the missing key included
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingKey(_) | Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_invalid_argument() {
        let err = ScoutError::missing_key("production");
        assert!(err.is_invalid_argument());
        assert!(matches!(err, ScoutError::MissingKey(ref e) if e.environment == "production"));
    }

    #[test]
    fn test_missing_key_message_names_environment() {
        let err = ScoutError::missing_key("staging");
        assert_eq!(
            err.to_string(),
            "Missing key: no scout key configured for environment 'staging'"
        );
    }

    #[test]
    fn test_config_error_is_not_invalid_argument() {
        assert!(!ScoutError::config("bad file").is_invalid_argument());
        assert!(ScoutError::invalid_argument("bad value").is_invalid_argument());
    }
}
