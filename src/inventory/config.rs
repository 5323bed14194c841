// Report run configuration
//
// Built once at the invocation boundary and handed to the runner; nothing
// below this point reads the environment.

use crate::Result;
use crate::constants::*;
use crate::error::InventoryError;
use crate::output::ReportFormat;

/// Settings for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub region: String,
    pub bucket: String,
    pub prefix: String,
    pub formats: Vec<ReportFormat>,
    pub topic_arn: Option<String>,
    pub detail_concurrency: usize,
}

impl ReportConfig {
    /// Create a configuration with defaults for everything but the bucket
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            bucket: bucket.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            formats: ReportFormat::parse_list(DEFAULT_FORMATS),
            topic_arn: None,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// Fails fast when the bucket is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bucket = non_empty(ENV_BUCKET).ok_or_else(|| InventoryError::missing_config(ENV_BUCKET))?;

        let region = non_empty(ENV_REGION)
            .or_else(|| non_empty(ENV_DEFAULT_REGION))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let prefix = lookup(ENV_PREFIX).unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let formats = ReportFormat::parse_list(
            &lookup(ENV_FORMATS).unwrap_or_else(|| DEFAULT_FORMATS.to_string()),
        );

        let detail_concurrency = match non_empty(ENV_DETAIL_CONCURRENCY) {
            Some(value) => parse_concurrency(ENV_DETAIL_CONCURRENCY, &value)?,
            None => DEFAULT_DETAIL_CONCURRENCY,
        };

        Ok(Self {
            region,
            bucket,
            prefix,
            formats,
            topic_arn: non_empty(ENV_TOPIC),
            detail_concurrency,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_formats(mut self, formats: Vec<ReportFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_topic(mut self, topic_arn: Option<String>) -> Self {
        self.topic_arn = topic_arn.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_detail_concurrency(mut self, concurrency: usize) -> Self {
        self.detail_concurrency = concurrency.max(1);
        self
    }

    /// Whether the summary notification will be published
    pub fn notifications_enabled(&self) -> bool {
        self.topic_arn.is_some()
    }
}

/// Parse a lookup concurrency setting; it must be a positive integer
fn parse_concurrency(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InventoryError::invalid_config(
            name,
            format!("expected a positive integer, got {:?}", value),
        )
        .into()),
    }
}
