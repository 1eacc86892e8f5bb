use async_trait::async_trait;
use lambda_runtime::Error;

use crate::attributes::AttributeMap;

/// Outbound publish seam. The SNS topic owns delivery and filtering;
/// this side only hands the message off once per invocation.
#[async_trait]
pub trait Notify {
    async fn publish(&self, message: &str, attributes: AttributeMap) -> Result<(), Error>;
}

/// SNS-backed notifier. Built once at process start and shared across
/// invocations; holds the topic ARN read from the environment.
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notify for SnsNotifier {
    async fn publish(&self, message: &str, attributes: AttributeMap) -> Result<(), Error> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .set_message_attributes(Some(attributes))
            .send()
            .await?;

        Ok(())
    }
}
