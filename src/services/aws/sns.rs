//! SNS summary notifications

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;

use crate::Result;
use crate::error::InventoryError;
use crate::services::NotificationChannel;

/// `NotificationChannel` backed by an SNS topic
#[derive(Debug, Clone)]
pub struct SnsNotificationChannel {
    client: Client,
}

impl SnsNotificationChannel {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl NotificationChannel for SnsNotificationChannel {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<()> {
        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| InventoryError::Notification {
                channel: self.channel_name().to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!(
            "SNS accepted message {}",
            output.message_id().unwrap_or("<none>")
        );
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "sns"
    }
}
