// acm-inventory - Certificate inventory reporting for AWS Certificate Manager
// Licensed under GPL-3.0

//! Inventory Constants
//!
//! Centralized names and defaults shared by the lister, the encoders and the
//! configuration loader, so the wire-level strings live in one place.

// =============================================================================
// ACM listing filters
// =============================================================================

/// Every ACM lifecycle status.
///
/// The listing call only returns certificates whose status is requested, so
/// leaving one out silently drops those certificates from the report.
pub const ALL_CERTIFICATE_STATUSES: [&str; 8] = [
    "PENDING_VALIDATION",
    "ISSUED",
    "INACTIVE",
    "EXPIRED",
    "VALIDATION_TIMED_OUT",
    "REVOKED",
    "FAILED",
    "NOT_IMPORTED",
];

/// Every ACM key type.
///
/// Without an explicit key type filter ACM only lists RSA_2048 certificates.
pub const ALL_KEY_TYPES: [&str; 7] = [
    "RSA_1024",
    "RSA_2048",
    "RSA_3072",
    "RSA_4096",
    "EC_prime256v1",
    "EC_secp384r1",
    "EC_secp521r1",
];

// =============================================================================
// Classification
// =============================================================================

/// Window, in whole days, for `expiring_in_30d`
pub const EXPIRY_WARNING_DAYS: i64 = 30;

// =============================================================================
// Configuration
// =============================================================================

/// Primary region variable
pub const ENV_REGION: &str = "AWS_REGION";

/// Fallback region variable
pub const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Target bucket for report artifacts (required)
pub const ENV_BUCKET: &str = "REPORTS_BUCKET_NAME";

/// Key prefix for report artifacts
pub const ENV_PREFIX: &str = "S3_PREFIX";

/// Comma-separated output formats
pub const ENV_FORMATS: &str = "REPORT_FORMATS";

/// Notification topic; empty or absent disables the notification step
pub const ENV_TOPIC: &str = "SNS_TOPIC_ARN";

/// Maximum number of concurrent describe calls
pub const ENV_DETAIL_CONCURRENCY: &str = "DETAIL_CONCURRENCY";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PREFIX: &str = "acm-inventory/";
pub const DEFAULT_FORMATS: &str = "json,csv";
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

// =============================================================================
// Artifacts
// =============================================================================

/// File name stem shared by every artifact
pub const ARTIFACT_STEM: &str = "acm-inventory";

/// strftime pattern for the run timestamp embedded in artifact keys
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// CSV column order
pub const CSV_HEADERS: [&str; 13] = [
    "arn",
    "domain_name",
    "status",
    "not_before",
    "not_after",
    "visibility",
    "source",
    "expiring_in_30d",
    "is_expired",
    "subject_alt_names",
    "in_use_by",
    "issuer",
    "key_algorithm",
];

/// Separator used to flatten list-valued columns in CSV
pub const CSV_LIST_SEPARATOR: &str = ";";
