use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::attributes::message_attributes;
use crate::notifier::Notify;

/// Republishes an object-creation event to the notification topic with its
/// partition attributes attached. Events that are not object creations are
/// skipped without a publish. Parsing and transport errors propagate to the
/// runtime as invocation failures; there is no local retry.
///
/// The payload stays a raw `Value` so the published body is the invocation
/// payload exactly as S3 sent it; the typed event is only derived from it
/// for attribute extraction.
pub async fn function_handler<N: Notify>(
    event: LambdaEvent<Value>,
    notifier: &N,
) -> Result<(), Error> {
    let payload = event.payload;
    let s3_event: S3Event = serde_json::from_value(payload.clone())?;

    let Some(attributes) = message_attributes(&s3_event)? else {
        tracing::info!("event is not an object creation, skipping");
        return Ok(());
    };

    let message = serde_json::to_string(&payload)?;
    notifier.publish(&message, attributes).await?;
    tracing::info!("republished event to topic");

    Ok(())
}
