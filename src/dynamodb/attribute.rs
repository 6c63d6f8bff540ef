//! Conversion between serde values and DynamoDB attribute values
//!
//! Items go through `serde_json::Value` on their way in and out, so any type
//! that implements `Serialize` / `Deserialize` can be stored. Binary
//! attributes have no JSON counterpart and are rejected on the way out.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// One DynamoDB record
pub type Item = HashMap<String, AttributeValue>;

/// Convert a JSON value into the matching attribute value
pub fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(k, v)| (k, to_attribute_value(v)))
                .collect(),
        ),
    }
}

/// Convert an attribute value back into JSON.
///
/// `name` is the attribute being converted, used in error messages.
pub fn from_attribute_value(name: &str, value: &AttributeValue) -> Result<Value> {
    let value = match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(|v| from_attribute_value(name, v))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::M(map) => Value::Object(to_object(map)?),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::B(_) => return Err(Error::unsupported(name, "binary")),
        AttributeValue::Bs(_) => return Err(Error::unsupported(name, "binary set")),
        _ => return Err(Error::unsupported(name, "unknown")),
    };

    Ok(value)
}

/// Marshal a serializable value into an item. The value must serialize to
/// a map (a struct or a map type).
pub fn marshal_item<T: Serialize>(input: &T) -> Result<Item> {
    match serde_json::to_value(input)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, to_attribute_value(v)))
            .collect()),
        other => Err(Error::unsupported("input", json_kind(&other))),
    }
}

/// Unmarshal an item into the caller's type, matching attributes to fields by name
pub fn unmarshal_item<T: DeserializeOwned>(item: &Item) -> Result<T> {
    let object = to_object(item)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

fn to_object(item: &Item) -> Result<Map<String, Value>> {
    item.iter()
        .map(|(k, v)| Ok((k.clone(), from_attribute_value(k, v)?)))
        .collect()
}

fn parse_number(n: &str) -> Result<Number> {
    Ok(serde_json::from_str::<Number>(n)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
