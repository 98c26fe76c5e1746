//! Diagnostic sink error types

use thiserror::Error;

/// Errors raised while selecting a destination
///
/// All of these are fatal configuration errors for the process; they are
/// returned so the caller can report them through the destination that is
/// still installed.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Facility token not in the closed facility table
    #[error("unknown syslog facility: {token}")]
    UnknownFacility { token: String },

    /// Severity token not in the closed severity table
    #[error("unknown syslog level: {token}")]
    UnknownSeverity { token: String },

    /// Path could not be opened for append
    #[error("could not open {path} for writing")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    pub fn unknown_facility(token: impl Into<String>) -> Self {
        Self::UnknownFacility {
            token: token.into(),
        }
    }

    pub fn unknown_severity(token: impl Into<String>) -> Self {
        Self::UnknownSeverity {
            token: token.into(),
        }
    }

    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// OS error number carried by the failure, if any
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Open { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, SinkError>;
