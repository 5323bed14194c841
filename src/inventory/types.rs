// Core types for the certificate inventory

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimal listing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSummary {
    pub arn: String,
    pub domain_name: Option<String>,
}

impl CertificateSummary {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            domain_name: None,
        }
    }
}

/// One page of the listing call
#[derive(Debug, Clone, Default)]
pub struct CertificatePage {
    pub summaries: Vec<CertificateSummary>,
    pub next_token: Option<String>,
}

/// ACM lifecycle status
///
/// Statuses the service introduces later are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateStatus {
    PendingValidation,
    Issued,
    Inactive,
    Expired,
    ValidationTimedOut,
    Revoked,
    Failed,
    NotImported,
    Other(String),
}

impl CertificateStatus {
    /// All statuses the listing call must request
    pub fn all() -> Vec<CertificateStatus> {
        crate::constants::ALL_CERTIFICATE_STATUSES
            .iter()
            .map(|s| CertificateStatus::from(*s))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            CertificateStatus::PendingValidation => "PENDING_VALIDATION",
            CertificateStatus::Issued => "ISSUED",
            CertificateStatus::Inactive => "INACTIVE",
            CertificateStatus::Expired => "EXPIRED",
            CertificateStatus::ValidationTimedOut => "VALIDATION_TIMED_OUT",
            CertificateStatus::Revoked => "REVOKED",
            CertificateStatus::Failed => "FAILED",
            CertificateStatus::NotImported => "NOT_IMPORTED",
            CertificateStatus::Other(s) => s,
        }
    }
}

impl From<&str> for CertificateStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING_VALIDATION" => CertificateStatus::PendingValidation,
            "ISSUED" => CertificateStatus::Issued,
            "INACTIVE" => CertificateStatus::Inactive,
            "EXPIRED" => CertificateStatus::Expired,
            "VALIDATION_TIMED_OUT" => CertificateStatus::ValidationTimedOut,
            "REVOKED" => CertificateStatus::Revoked,
            "FAILED" => CertificateStatus::Failed,
            "NOT_IMPORTED" => CertificateStatus::NotImported,
            other => CertificateStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who issued the certificate material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateType {
    AmazonIssued,
    Imported,
    Private,
    Other(String),
}

impl CertificateType {
    pub fn as_str(&self) -> &str {
        match self {
            CertificateType::AmazonIssued => "AMAZON_ISSUED",
            CertificateType::Imported => "IMPORTED",
            CertificateType::Private => "PRIVATE",
            CertificateType::Other(s) => s,
        }
    }
}

impl From<&str> for CertificateType {
    fn from(value: &str) -> Self {
        match value {
            "AMAZON_ISSUED" => CertificateType::AmazonIssued,
            "IMPORTED" => CertificateType::Imported,
            "PRIVATE" => CertificateType::Private,
            other => CertificateType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in time as the detail service reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Structured UTC instant
    Instant(DateTime<Utc>),
    /// Text that still has to be parsed
    Raw(String),
}

impl Timestamp {
    /// The instant this timestamp denotes, if it can be read as one
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Instant(dt) => Some(*dt),
            Timestamp::Raw(raw) => super::timestamp::parse_timestamp(raw),
        }
    }
}

/// Full certificate record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateDetail {
    pub arn: String,
    pub domain_name: Option<String>,
    pub subject_alt_names: Vec<String>,
    pub status: Option<CertificateStatus>,
    pub not_before: Option<Timestamp>,
    pub not_after: Option<Timestamp>,
    pub in_use_by: Vec<String>,
    pub issuer: Option<String>,
    pub key_algorithm: Option<String>,
    pub certificate_type: Option<CertificateType>,
}

impl CertificateDetail {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            ..Default::default()
        }
    }
}

/// Outcome of one detail lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailResult {
    Fetched(CertificateDetail),
    Failed { arn: String, error: String },
}

impl DetailResult {
    pub fn arn(&self) -> &str {
        match self {
            DetailResult::Fetched(detail) => &detail.arn,
            DetailResult::Failed { arn, .. } => arn,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DetailResult::Failed { .. })
    }
}

/// Whether the issuing CA is public or private
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "PUBLIC",
            Visibility::Private => "PRIVATE",
        }
    }
}

/// Whether AWS or the account owner supplied the certificate material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    AwsProvided,
    CustomerProvided,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::AwsProvided => "AWS_PROVIDED",
            Source::CustomerProvided => "CUSTOMER_PROVIDED",
        }
    }
}

/// One flattened report row
///
/// Field order is the JSON key order of the report. Every field is always
/// populated: absent values are empty strings or empty lists, never null.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InventoryRow {
    pub arn: String,
    pub domain_name: String,
    pub subject_alt_names: Vec<String>,
    pub status: String,
    pub not_before: String,
    pub not_after: String,
    pub in_use_by: Vec<String>,
    pub issuer: String,
    pub key_algorithm: String,
    pub acm_type: String,
    #[serde(serialize_with = "blank_if_none")]
    pub visibility: Option<Visibility>,
    #[serde(serialize_with = "blank_if_none")]
    pub source: Option<Source>,
    pub expiring_in_30d: bool,
    pub is_expired: bool,
}

impl InventoryRow {
    /// Counted in `expiring_within_30_days`
    pub fn is_expiring_soon(&self) -> bool {
        self.expiring_in_30d && !self.is_expired
    }

    pub fn visibility_str(&self) -> &'static str {
        self.visibility.map(|v| v.as_str()).unwrap_or("")
    }

    pub fn source_str(&self) -> &'static str {
        self.source.map(|s| s.as_str()).unwrap_or("")
    }
}

fn blank_if_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Aggregate over one run; also the notification message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub account_id: String,
    pub region: String,
    pub total: usize,
    pub expiring_within_30_days: usize,
    pub uploaded_keys: Vec<String>,
}

impl RunSummary {
    pub fn from_rows(
        account_id: impl Into<String>,
        region: impl Into<String>,
        rows: &[InventoryRow],
        uploaded_keys: Vec<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
            total: rows.len(),
            expiring_within_30_days: rows.iter().filter(|r| r.is_expiring_soon()).count(),
            uploaded_keys,
        }
    }

    /// Subject line for the summary notification
    pub fn subject(&self) -> String {
        format!("ACM Inventory {} ({} certs)", self.region, self.total)
    }
}

/// What an invocation returns to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    pub status: &'static str,
    #[serde(flatten)]
    pub summary: RunSummary,
}

impl InvocationResult {
    pub fn ok(summary: RunSummary) -> Self {
        Self {
            status: "ok",
            summary,
        }
    }
}
