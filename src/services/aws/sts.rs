//! Caller identity via STS

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;
use aws_sdk_sts::error::DisplayErrorContext;

use crate::Result;
use crate::error::InventoryError;
use crate::services::IdentityService;

/// `IdentityService` backed by `GetCallerIdentity`
#[derive(Debug, Clone)]
pub struct StsIdentityService {
    client: Client,
}

impl StsIdentityService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityService for StsIdentityService {
    async fn account_id(&self) -> Result<String> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| InventoryError::Identity {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let account = output.account().ok_or_else(|| InventoryError::Identity {
            message: "caller identity has no account".to_string(),
        })?;

        Ok(account.to_string())
    }
}
