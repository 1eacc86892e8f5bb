use std::collections::HashMap;

use aws_lambda_events::event::s3::S3Event;
use aws_sdk_sns::types::MessageAttributeValue;
use thiserror::Error;

/// Message attributes keyed by partition name, ready to attach to a publish
/// call. Small in practice (1-5 entries).
pub type AttributeMap = HashMap<String, MessageAttributeValue>;

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("event contains no records")]
    EmptyEvent,
    #[error("record has no object key")]
    MissingObjectKey,
    #[error("object key is not valid percent-encoded UTF-8: {0}")]
    KeyEncoding(#[from] std::string::FromUtf8Error),
    #[error("partition segment {0:?} has no '=' separator")]
    MalformedSegment(String),
    #[error("failed to build message attribute: {0}")]
    Attribute(#[from] aws_sdk_sns::error::BuildError),
}

/// Derives SNS message attributes from the first record of an S3 event.
///
/// Returns `Ok(None)` when the record is not an object-creation event; the
/// caller must then skip publishing. Otherwise percent-decodes the object
/// key and turns every `name=value` path segment except the trailing file
/// name into a String attribute. Duplicate partition names resolve to the
/// last-seen value.
pub fn message_attributes(event: &S3Event) -> Result<Option<AttributeMap>, AttributeError> {
    let record = event.records.first().ok_or(AttributeError::EmptyEvent)?;

    let event_name = record.event_name.as_deref().unwrap_or_default();
    if !event_name.contains("ObjectCreated") {
        return Ok(None);
    }

    let key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or(AttributeError::MissingObjectKey)?;
    let decoded = urlencoding::decode(key)?;

    let segments: Vec<&str> = decoded.split('/').collect();

    let mut attributes = AttributeMap::new();
    for segment in &segments[..segments.len() - 1] {
        let (name, value) = split_partition_segment(segment)?;
        attributes.insert(name.to_string(), string_attribute(value)?);
    }
    Ok(Some(attributes))
}

/// Splits a partition segment on `=`, keeping exactly the first two tokens.
///
/// Values containing further `=` characters are truncated at the second
/// `=`: `"a=1=2"` yields `("a", "1")`. Subscribers filter on the truncated
/// value.
fn split_partition_segment(segment: &str) -> Result<(&str, &str), AttributeError> {
    let mut tokens = segment.split('=');
    let name = tokens.next().unwrap_or_default();
    let value = tokens
        .next()
        .ok_or_else(|| AttributeError::MalformedSegment(segment.to_string()))?;
    Ok((name, value))
}

/// All partition values become String attributes, even numeric-looking ones.
fn string_attribute(value: &str) -> Result<MessageAttributeValue, AttributeError> {
    let attribute = MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()?;
    Ok(attribute)
}
