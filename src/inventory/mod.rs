// Certificate Inventory
//
// The report pipeline:
// - Lists every ACM certificate across all lifecycle statuses
// - Describes each one, absorbing per-certificate failures into degraded rows
// - Classifies expiry, visibility and provenance against one "now" per run
// - Encodes the rows as JSON/CSV artifacts and publishes a run summary

pub mod classifier;
pub mod config;
pub mod fetcher;
pub mod lister;
pub mod runner;
pub mod timestamp;
pub mod types;

// Re-export commonly used types
pub use classifier::{ExpiryState, classify, classify_all};
pub use config::ReportConfig;
pub use fetcher::{fetch_all, fetch_detail};
pub use lister::list_all_certificates;
pub use runner::{InventoryRunner, artifact_key};
pub use types::{
    CertificateDetail, CertificatePage, CertificateStatus, CertificateSummary, CertificateType,
    DetailResult, InventoryRow, InvocationResult, RunSummary, Source, Timestamp, Visibility,
};
