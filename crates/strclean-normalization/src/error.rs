//! Error types for pipeline configuration.

use thiserror::Error;

/// Errors raised while loading pipeline configuration.
///
/// Applying a pipeline never fails; only building one from configuration
/// can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or an unknown step name.
    #[error("invalid pipeline configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A named pipeline was requested that the configuration does not define.
    #[error("unknown pipeline '{name}'")]
    UnknownPipeline { name: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnknownPipeline {
            name: "labels".to_string(),
        };
        assert_eq!(err.to_string(), "unknown pipeline 'labels'");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid pipeline configuration"));
    }
}
