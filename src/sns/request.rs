//! SNS request builders and message unmarshaling

use std::collections::HashMap;

use aws_sdk_sns::operation::publish::builders::PublishInputBuilder;
use aws_sdk_sns::operation::publish::PublishInput;
use aws_sdk_sns::primitives::Blob;
use aws_sdk_sns::types::MessageAttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::sns::types::{
    Body, ATTRIBUTE_BINARY, ATTRIBUTE_NUMBER, ATTRIBUTE_STRING, ATTRIBUTE_STRING_ARRAY,
    MESSAGE_STRUCTURE,
};

/// Build a publish request for `input`, wrapped in the `default` envelope
/// and targeted at `endpoint`
pub fn new_publish_input<T: Serialize + ?Sized>(
    input: &T,
    message_attributes: &HashMap<String, Value>,
    endpoint: &str,
) -> Result<PublishInputBuilder> {
    if endpoint.is_empty() {
        return Err(Error::empty("endpoint"));
    }

    let payload = serde_json::to_string(input)?;
    let message = serde_json::to_string(&Body { default: payload })?;
    let attributes = to_message_attributes(message_attributes)?;

    Ok(PublishInput::builder()
        .message(message)
        .set_message_attributes(Some(attributes).filter(|a| !a.is_empty()))
        .message_structure(MESSAGE_STRUCTURE)
        .target_arn(endpoint))
}

/// Decode an SNS message into the caller's type.
///
/// The message is tried as JSON first, then as a JSON string literal holding
/// the payload. Only when both fail are escaped quotes undone, so
/// `{\"stuff\":\"value\"}` decodes the same as `{"stuff":"value"}`.
pub fn unmarshal_message<T: DeserializeOwned>(message: &str) -> Result<T> {
    if message.is_empty() {
        return Err(Error::empty("message"));
    }

    if let Ok(decoded) = serde_json::from_str(message) {
        return Ok(decoded);
    }

    if let Ok(inner) = serde_json::from_str::<String>(message) {
        if let Ok(decoded) = serde_json::from_str(&inner) {
            return Ok(decoded);
        }
    }

    let unescaped = unescape_message(message);
    Ok(serde_json::from_str(&unescaped)?)
}

fn unescape_message(message: &str) -> String {
    message.replace("\\\"", "\"")
}

/// Convert loosely typed attributes into SNS message attributes
pub fn to_message_attributes(
    attributes: &HashMap<String, Value>,
) -> Result<HashMap<String, MessageAttributeValue>> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), to_message_attribute(name, value)?)))
        .collect()
}

fn to_message_attribute(name: &str, value: &Value) -> Result<MessageAttributeValue> {
    let builder = MessageAttributeValue::builder();

    let builder = match value {
        Value::Null => return Err(Error::unsupported(name, "null")),
        Value::String(s) => builder.data_type(ATTRIBUTE_STRING).string_value(s),
        Value::Number(n) => builder.data_type(ATTRIBUTE_NUMBER).string_value(n.to_string()),
        Value::Array(items) if items.iter().all(Value::is_string) => builder
            .data_type(ATTRIBUTE_STRING_ARRAY)
            .string_value(value.to_string()),
        other => builder
            .data_type(ATTRIBUTE_BINARY)
            .binary_value(Blob::new(serde_json::to_vec(other)?)),
    };

    Ok(builder.build()?)
}
