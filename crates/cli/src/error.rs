//! Error types for CLI operations.
//!
//! Every variant is fatal; its `Display` text is the diagnostic line body.

use contracts::ContractError;
use dispatcher::DispatchError;
use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    #[error("{path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ContractError,
    },

    /// Neither `--dump` nor `[telemetry] dump` was given
    #[error("no telemetry source configured")]
    NoTelemetrySource,

    /// Telemetry or catalog failure
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl CliError {
    pub fn config(path: impl Into<String>, source: ContractError) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
