// Collaborator Traits
// Interfaces the report run depends on; AWS and local adapters implement them

use crate::inventory::types::{CertificateDetail, CertificatePage, CertificateStatus};
use async_trait::async_trait;

/// Certificate listing and lookup
#[async_trait]
pub trait CertificateService: Send + Sync {
    /// Fetch one page of summaries restricted to `statuses`
    async fn list_page(
        &self,
        statuses: &[CertificateStatus],
        next_token: Option<String>,
    ) -> crate::Result<CertificatePage>;

    /// Fetch the full record for one certificate
    async fn describe(&self, arn: &str) -> crate::Result<CertificateDetail>;
}

/// Caller identity lookup
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Account the run is operating in; used only to name artifacts
    async fn account_id(&self) -> crate::Result<String>;
}

/// Destination for report artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store `body` under `bucket`/`key`
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> crate::Result<()>;
}

/// Notification channel for the run summary
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Publish a message to `topic`
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> crate::Result<()>;

    /// Get the channel name for logging
    fn channel_name(&self) -> &str;
}
