//! AWS client setup
//!
//! Loads credentials through the default provider chain and applies the
//! configured region to every client.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::sync::Arc;

use super::{AcmCertificateService, S3ArtifactStore, SnsNotificationChannel, StsIdentityService};

/// Load the shared SDK configuration for `region`
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Every AWS collaborator a report run needs
#[derive(Clone)]
pub struct AwsServices {
    pub certificates: Arc<AcmCertificateService>,
    pub identity: Arc<StsIdentityService>,
    pub store: Arc<S3ArtifactStore>,
    pub notifier: Arc<SnsNotificationChannel>,
}

impl AwsServices {
    /// Build all clients from one configuration
    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            certificates: Arc::new(AcmCertificateService::new(config)),
            identity: Arc::new(StsIdentityService::new(config)),
            store: Arc::new(S3ArtifactStore::new(config)),
            notifier: Arc::new(SnsNotificationChannel::new(config)),
        }
    }

    /// Load configuration for `region` and build all clients
    pub async fn connect(region: &str) -> Self {
        let config = load_sdk_config(region).await;
        tracing::debug!("Initialized AWS clients for region {}", region);
        Self::from_config(&config)
    }
}
