//! ACM certificate listing and lookup

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_acm::Client;
use aws_sdk_acm::error::DisplayErrorContext;
use aws_sdk_acm::primitives::{DateTime as SdkDateTime, DateTimeFormat};
use aws_sdk_acm::types::{self as acm, Filters, KeyAlgorithm};
use chrono::{DateTime, Utc};

use crate::Result;
use crate::constants::ALL_KEY_TYPES;
use crate::error::InventoryError;
use crate::inventory::types::{
    CertificateDetail, CertificatePage, CertificateStatus, CertificateSummary, CertificateType,
    Timestamp,
};
use crate::services::CertificateService;

/// `CertificateService` backed by AWS Certificate Manager
#[derive(Debug, Clone)]
pub struct AcmCertificateService {
    client: Client,
}

impl AcmCertificateService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Listing filter that admits every key type
    fn all_key_types() -> Filters {
        Filters::builder()
            .set_key_types(Some(
                ALL_KEY_TYPES.iter().map(|k| KeyAlgorithm::from(*k)).collect(),
            ))
            .build()
    }
}

#[async_trait]
impl CertificateService for AcmCertificateService {
    async fn list_page(
        &self,
        statuses: &[CertificateStatus],
        next_token: Option<String>,
    ) -> Result<CertificatePage> {
        let output = self
            .client
            .list_certificates()
            .set_certificate_statuses(Some(
                statuses
                    .iter()
                    .map(|s| acm::CertificateStatus::from(s.as_str()))
                    .collect(),
            ))
            .includes(Self::all_key_types())
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| InventoryError::Listing {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let summaries = output
            .certificate_summary_list()
            .iter()
            .map(|s| CertificateSummary {
                arn: s.certificate_arn().unwrap_or_default().to_string(),
                domain_name: s.domain_name().map(str::to_string),
            })
            .collect();

        Ok(CertificatePage {
            summaries,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn describe(&self, arn: &str) -> Result<CertificateDetail> {
        let output = self
            .client
            .describe_certificate()
            .certificate_arn(arn)
            .send()
            .await
            .map_err(|e| InventoryError::Describe {
                arn: arn.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let certificate = output.certificate().ok_or_else(|| InventoryError::Describe {
            arn: arn.to_string(),
            message: "response contained no certificate".to_string(),
        })?;

        Ok(convert_detail(arn, certificate))
    }
}

/// Map the SDK record onto the inventory model
fn convert_detail(requested_arn: &str, cert: &acm::CertificateDetail) -> CertificateDetail {
    CertificateDetail {
        arn: cert
            .certificate_arn()
            .unwrap_or(requested_arn)
            .to_string(),
        domain_name: cert.domain_name().map(str::to_string),
        subject_alt_names: cert.subject_alternative_names().to_vec(),
        status: cert.status().map(|s| CertificateStatus::from(s.as_str())),
        not_before: cert.not_before().map(convert_timestamp),
        not_after: cert.not_after().map(convert_timestamp),
        in_use_by: cert.in_use_by().to_vec(),
        issuer: cert.issuer().map(str::to_string),
        key_algorithm: cert.key_algorithm().map(|k| k.as_str().to_string()),
        certificate_type: cert.r#type().map(|t| CertificateType::from(t.as_str())),
    }
}

fn convert_timestamp(dt: &SdkDateTime) -> Timestamp {
    match DateTime::<Utc>::from_timestamp(dt.secs(), dt.subsec_nanos()) {
        Some(instant) => Timestamp::Instant(instant),
        None => Timestamp::Raw(
            dt.fmt(DateTimeFormat::DateTime)
                .unwrap_or_else(|_| dt.secs().to_string()),
        ),
    }
}
