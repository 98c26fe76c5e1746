//! Layered error definitions
//!
//! Categorized by source: config / telemetry / catalog / io

use thiserror::Error;

/// Unified collaborator error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Telemetry Errors =====
    /// Monitoring bus could not be reached or refused the request
    #[error("{message}")]
    TelemetryUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Metric dump or bus reply could not be parsed
    #[error("malformed telemetry at line {line}: {message}")]
    TelemetryMalformed { line: usize, message: String },

    // ===== Catalog Errors =====
    /// Relational store could not be reached
    #[error("{message}")]
    CatalogUnavailable { message: String },

    // ===== General Errors =====
    /// IO error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create telemetry unavailable error
    pub fn telemetry_unavailable(message: impl Into<String>) -> Self {
        Self::TelemetryUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create telemetry malformed error
    pub fn telemetry_malformed(line: usize, message: impl Into<String>) -> Self {
        Self::TelemetryMalformed {
            line,
            message: message.into(),
        }
    }

    /// Create catalog unavailable error
    pub fn catalog_unavailable(message: impl Into<String>) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
        }
    }
}
