// acm-inventory - Certificate inventory reporting for AWS Certificate Manager
// Licensed under GPL-3.0

//! acm-inventory lists every certificate held by AWS Certificate Manager in a
//! region, classifies expiry, visibility and provenance, writes JSON/CSV
//! report artifacts to object storage and publishes a short run summary.

pub mod cli;
pub mod constants;
pub mod error;
pub mod inventory;
pub mod output;
pub mod services;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::InventoryError;
pub use crate::inventory::{InventoryRunner, InvocationResult, ReportConfig};
pub use crate::output::ReportFormat;

/// Result type for inventory operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for inventory operations
pub use anyhow::Error;
