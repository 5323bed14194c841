// Inventory Runner - sequences one report run
//
// list -> describe -> classify -> encode -> write -> summarize -> notify.
// Per-certificate lookup failures are absorbed into degraded rows; listing,
// identity, artifact write and notification failures abort the run.

use crate::Result;
use crate::constants::{ARTIFACT_STEM, ARTIFACT_TIMESTAMP_FORMAT};
use crate::error::InventoryError;
use crate::inventory::classifier::classify_all;
use crate::inventory::config::ReportConfig;
use crate::inventory::fetcher::fetch_all;
use crate::inventory::lister::list_all_certificates;
use crate::inventory::types::{InventoryRow, InvocationResult, RunSummary};
use crate::output::ReportFormat;
use crate::services::{
    ArtifactStore, CertificateService, Clock, IdentityService, NotificationChannel,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

/// Build the storage key for one artifact
///
/// `{prefix}acm-inventory-{account_id}-{region}-{YYYYMMDDTHHMMSSZ}.{ext}`
pub fn artifact_key(
    prefix: &str,
    account_id: &str,
    region: &str,
    run_time: DateTime<Utc>,
    format: ReportFormat,
) -> String {
    format!(
        "{}{}-{}-{}-{}.{}",
        prefix,
        ARTIFACT_STEM,
        account_id,
        region,
        run_time.format(ARTIFACT_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// One configured report run and its collaborators
pub struct InventoryRunner {
    config: ReportConfig,
    certificates: Arc<dyn CertificateService>,
    identity: Arc<dyn IdentityService>,
    store: Arc<dyn ArtifactStore>,
    notifier: Option<Arc<dyn NotificationChannel>>,
    clock: Arc<dyn Clock>,
}

impl InventoryRunner {
    pub fn new(
        config: ReportConfig,
        certificates: Arc<dyn CertificateService>,
        identity: Arc<dyn IdentityService>,
        store: Arc<dyn ArtifactStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            certificates,
            identity,
            store,
            notifier: None,
            clock,
        }
    }

    /// Attach the channel used when a topic is configured
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationChannel>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Execute a full run
    pub async fn execute(&self) -> Result<InvocationResult> {
        let started = Instant::now();
        let now = self.clock.now();

        tracing::info!(
            "Starting certificate inventory for region {} (formats: {:?})",
            self.config.region,
            self.config.formats
        );

        let summaries = list_all_certificates(self.certificates.as_ref()).await?;
        let details = fetch_all(
            self.certificates.as_ref(),
            &summaries,
            self.config.detail_concurrency,
        )
        .await;
        let degraded = details.iter().filter(|d| d.is_failed()).count();
        let rows = classify_all(&details, now);

        let account_id = self.identity.account_id().await?;

        let mut uploaded_keys = Vec::with_capacity(self.config.formats.len());
        for format in &self.config.formats {
            let key = self.write_artifact(&rows, &account_id, now, *format).await?;
            uploaded_keys.push(key);
        }

        let summary = RunSummary::from_rows(&account_id, &self.config.region, &rows, uploaded_keys);

        self.notify(&summary).await?;

        tracing::info!(
            "Inventory complete: {} certificates, {} expiring within 30 days, {} degraded, {} artifact(s) in {:.2}s",
            summary.total,
            summary.expiring_within_30_days,
            degraded,
            summary.uploaded_keys.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(InvocationResult::ok(summary))
    }

    async fn write_artifact(
        &self,
        rows: &[InventoryRow],
        account_id: &str,
        now: DateTime<Utc>,
        format: ReportFormat,
    ) -> Result<String> {
        let key = artifact_key(
            &self.config.prefix,
            account_id,
            &self.config.region,
            now,
            format,
        );
        let body = format.encode(rows)?;
        let size = body.len();

        self.store
            .put(&self.config.bucket, &key, body, format.content_type())
            .await?;

        tracing::info!(
            "Wrote {} report to {}/{} ({} bytes)",
            format,
            self.config.bucket,
            key,
            size
        );
        Ok(key)
    }

    async fn notify(&self, summary: &RunSummary) -> Result<()> {
        let Some(topic) = self.config.topic_arn.as_deref() else {
            tracing::debug!("No notification topic configured; skipping summary");
            return Ok(());
        };

        let Some(notifier) = self.notifier.as_ref() else {
            tracing::warn!("Notification topic {} set but no channel attached", topic);
            return Ok(());
        };

        let message = serde_json::to_string(summary).map_err(InventoryError::from)?;
        notifier.publish(topic, &summary.subject(), &message).await?;

        tracing::info!("Summary published via {} to {}", notifier.channel_name(), topic);
        Ok(())
    }
}
