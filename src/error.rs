// Error types for acm-inventory
//
// Structured failure classes for a report run. Fallible functions return
// `crate::Result` (anyhow) and carry one of these as the root cause, so callers
// can still downcast when they need to tell the classes apart.

use thiserror::Error;

/// Main error type for inventory runs
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required setting is absent from the environment and the command line
    #[error("Missing required configuration: {name}")]
    MissingConfig { name: String },

    /// A setting is present but cannot be used
    #[error("Invalid configuration for {name}: {message}")]
    InvalidConfig { name: String, message: String },

    /// The paginated certificate listing failed
    #[error("Certificate listing failed: {message}")]
    Listing { message: String },

    /// A single certificate lookup failed
    #[error("Describe failed for {arn}: {message}")]
    Describe { arn: String, message: String },

    /// The caller identity lookup failed
    #[error("Identity lookup failed: {message}")]
    Identity { message: String },

    /// Writing a report artifact failed
    #[error("Failed to write artifact {key}: {message}")]
    ArtifactWrite { key: String, message: String },

    /// Publishing the run summary failed
    #[error("Notification via {channel} failed: {message}")]
    Notification { channel: String, message: String },

    /// Serializing a report body failed
    #[error("Failed to encode {format} report: {message}")]
    Encoding { format: String, message: String },
}

impl InventoryError {
    /// Shorthand for a missing setting
    pub fn missing_config(name: impl Into<String>) -> Self {
        InventoryError::MissingConfig { name: name.into() }
    }

    /// Shorthand for an unusable setting
    pub fn invalid_config(name: impl Into<String>, message: impl Into<String>) -> Self {
        InventoryError::InvalidConfig {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Encoding {
            format: "csv".to_string(),
            message: err.to_string(),
        }
    }
}

impl<W> From<csv::IntoInnerError<W>> for InventoryError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        InventoryError::Encoding {
            format: "csv".to_string(),
            message: format!("CSV writer error: {}", err),
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Encoding {
            format: "json".to_string(),
            message: err.to_string(),
        }
    }
}
