// CLI module - Command line interface and argument parsing
// Licensed under GPL-3.0

use crate::Result;
use crate::error::InventoryError;
use crate::inventory::ReportConfig;
use crate::output::ReportFormat;
use clap::Parser;

mod output_args;

pub use output_args::OutputArgs;

/// acm-inventory - certificate inventory reports for AWS Certificate Manager
///
/// Settings are read from the environment (AWS_REGION/AWS_DEFAULT_REGION,
/// REPORTS_BUCKET_NAME, S3_PREFIX, REPORT_FORMATS, SNS_TOPIC_ARN,
/// DETAIL_CONCURRENCY); any flag given here overrides its variable.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, long_about = None)]
#[command(name = "acm-inventory")]
#[command(about = "Inventory report of ACM certificates", long_about = None)]
pub struct Args {
    // ============ Report Target ============
    /// AWS region to inventory
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Bucket receiving the report artifacts
    #[arg(short = 'b', long = "bucket", value_name = "BUCKET")]
    pub bucket: Option<String>,

    /// Key prefix for report artifacts
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Comma-separated report formats (json, csv)
    #[arg(long = "formats", value_name = "LIST")]
    pub formats: Option<String>,

    /// SNS topic for the run summary
    #[arg(long = "topic-arn", value_name = "ARN")]
    pub topic_arn: Option<String>,

    /// Maximum concurrent certificate lookups
    #[arg(short = 'c', long = "concurrency", value_name = "N")]
    pub concurrency: Option<usize>,

    // ============ Output and Delivery ============
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Environment settings with command line overrides applied
    pub fn to_config(&self) -> Result<ReportConfig> {
        self.to_config_with(|key| std::env::var(key).ok())
    }

    /// Same as `to_config` with an explicit environment lookup
    pub fn to_config_with<F>(&self, lookup: F) -> Result<ReportConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = self.bucket.clone();
        let mut config = ReportConfig::from_lookup(|key| {
            if key == crate::constants::ENV_BUCKET && bucket.is_some() {
                return bucket.clone();
            }
            lookup(key)
        })?;

        if let Some(region) = &self.region {
            config = config.with_region(region.clone());
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_prefix(prefix.clone());
        }
        if let Some(formats) = &self.formats {
            config = config.with_formats(ReportFormat::parse_list(formats));
        }
        if self.topic_arn.is_some() {
            config = config.with_topic(self.topic_arn.clone());
        }
        if self.output.no_notify {
            config = config.with_topic(None);
        }
        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(InventoryError::invalid_config(
                    "--concurrency",
                    "expected a positive integer, got 0",
                )
                .into());
            }
            config = config.with_detail_concurrency(concurrency);
        }

        Ok(config)
    }
}
