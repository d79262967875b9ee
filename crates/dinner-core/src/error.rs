//! Error types for the dinner planner helpers.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for initialization and configuration.
///
/// Formatting itself never fails: bad input renders as
/// [`INVALID_DATE`](crate::formatter::INVALID_DATE) instead.
#[derive(Error, Debug)]
pub enum DinnerError {
    /// Invalid or unusable configuration value
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The startup hook was asked to run a second time
    #[error("Application is already initialized")]
    AlreadyInitialized,
    /// A helper is already installed under the requested name
    #[error("Helper '{name}' is already registered")]
    HelperConflict { name: String },
}

impl DinnerError {
    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait mapping foreign errors into configuration errors with
/// context, in the spirit of `anyhow::Context`.
pub trait ConfigResultExt<T> {
    /// Map the error into [`DinnerError::Configuration`] prefixed by `message`.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DinnerError::configuration(format!("{message}: {e}")))
    }
}

/// Result type alias for dinner planner operations
pub type Result<T> = std::result::Result<T, DinnerError>;
