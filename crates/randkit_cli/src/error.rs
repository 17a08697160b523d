//! CLI error type.

use randkit_distributions::DistributionError;
use randkit_engines::StateDecodeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `randkit` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A saved engine state could not be restored.
    #[error("Engine state error: {0}")]
    State(#[from] StateDecodeError),

    /// Distribution parameters were rejected.
    #[error("{0}")]
    Distribution(#[from] DistributionError),

    /// A command argument was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a file or stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let err: CliError = StateDecodeError::UnknownTag.into();
        assert_eq!(
            err.to_string(),
            "Engine state error: unrecognised engine state tag"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::InvalidCount(0).into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
