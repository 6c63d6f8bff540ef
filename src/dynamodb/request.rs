//! DynamoDB request builders and response unmarshalers

use aws_sdk_dynamodb::operation::get_item::builders::GetItemInputBuilder;
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::builders::PutItemInputBuilder;
use aws_sdk_dynamodb::operation::put_item::PutItemInput;
use aws_sdk_dynamodb::operation::scan::builders::ScanInputBuilder;
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::dynamodb::attribute::{marshal_item, to_attribute_value, unmarshal_item, Item};
use crate::error::{Error, Result};

/// Filter used by [`new_scan_input`]
pub const SCAN_FILTER_EXPRESSION: &str = "#key = :value";

/// Build a put-item request storing `input` in `table`
pub fn new_put_item_input<T: Serialize>(input: &T, table: &str) -> Result<PutItemInputBuilder> {
    if table.is_empty() {
        return Err(Error::empty("table"));
    }
    let item = marshal_item(input)?;
    if item.is_empty() {
        return Err(Error::empty("input"));
    }

    Ok(PutItemInput::builder()
        .table_name(table)
        .set_item(Some(item)))
}

/// Build a get-item request for the item whose string key `key_name` equals `key_value`
pub fn new_get_item_input(
    table: &str,
    key_name: &str,
    key_value: &str,
) -> Result<GetItemInputBuilder> {
    if table.is_empty() {
        return Err(Error::empty("table"));
    }
    if key_name.is_empty() {
        return Err(Error::empty("key_name"));
    }
    if key_value.is_empty() {
        return Err(Error::empty("key_value"));
    }

    Ok(GetItemInput::builder()
        .table_name(table)
        .key(key_name, AttributeValue::S(key_value.to_string())))
}

/// Build a scan request filtering on `key_name = key_value`
pub fn new_scan_input<V: Serialize + ?Sized>(
    table: &str,
    key_name: &str,
    key_value: &V,
) -> Result<ScanInputBuilder> {
    if table.is_empty() {
        return Err(Error::empty("table"));
    }
    if key_name.is_empty() {
        return Err(Error::empty("key_name"));
    }

    let value = serde_json::to_value(key_value)?;
    if matches!(&value, Value::Null) || matches!(&value, Value::String(s) if s.is_empty()) {
        return Err(Error::empty("key_value"));
    }

    Ok(ScanInput::builder()
        .table_name(table)
        .filter_expression(SCAN_FILTER_EXPRESSION)
        .expression_attribute_names("#key", key_name)
        .expression_attribute_values(":value", to_attribute_value(value)))
}

/// Unmarshal the item carried by a get-item response
pub fn unmarshal_get_item_output<T: DeserializeOwned>(output: &GetItemOutput) -> Result<T> {
    let item = output
        .item()
        .filter(|item| !item.is_empty())
        .ok_or(Error::EmptyResult { param: "item" })?;

    unmarshal_item(item)
}

/// Unmarshal every item returned by a scan
pub fn unmarshal_scan_output<T: DeserializeOwned>(output: &ScanOutput) -> Result<Vec<T>> {
    output.items().iter().map(unmarshal_item).collect()
}

/// Unmarshal the new image of a DynamoDB stream record
pub fn unmarshal_stream_image<T: DeserializeOwned>(new_image: &Item) -> Result<T> {
    if new_image.is_empty() {
        return Err(Error::empty("new_image"));
    }

    unmarshal_item(new_image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Record {
        some_param: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<i64>,
    }

    fn record() -> Record {
        Record {
            some_param: "primary".to_string(),
            count: Some(7),
        }
    }

    #[test]
    fn test_put_item_input() {
        let builder = new_put_item_input(&record(), "records").unwrap();
        assert_eq!(builder.get_table_name().as_deref(), Some("records"));

        let item = builder.get_item().as_ref().unwrap();
        assert_eq!(item["some_param"], AttributeValue::S("primary".to_string()));
        assert_eq!(item["count"], AttributeValue::N("7".to_string()));
    }

    #[test]
    fn test_put_item_input_missing_parameters() {
        let err = new_put_item_input(&record(), "").unwrap_err();
        assert_eq!(err.param(), Some("table"));

        let err = new_put_item_input(&"not a map", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyParameter);
        assert_eq!(err.param(), Some("table"));

        let empty = serde_json::json!({});
        let err = new_put_item_input(&empty, "records").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyParameter);
        assert_eq!(err.param(), Some("input"));
    }

    #[test]
    fn test_get_item_input() {
        let builder = new_get_item_input("records", "some_param", "primary").unwrap();
        assert_eq!(builder.get_table_name().as_deref(), Some("records"));
        let key = builder.get_key().as_ref().unwrap();
        assert_eq!(key["some_param"], AttributeValue::S("primary".to_string()));
    }

    #[test]
    fn test_get_item_input_missing_parameters() {
        let cases = [
            (("", "k", "v"), "table"),
            (("t", "", "v"), "key_name"),
            (("t", "k", ""), "key_value"),
        ];
        for ((table, key_name, key_value), param) in cases {
            let err = new_get_item_input(table, key_name, key_value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyParameter);
            assert_eq!(err.param(), Some(param));
        }
    }

    #[test]
    fn test_scan_input_uses_placeholders() {
        let builder = new_scan_input("records", "count", &7).unwrap();
        assert_eq!(
            builder.get_filter_expression().as_deref(),
            Some(SCAN_FILTER_EXPRESSION)
        );
        let names = builder.get_expression_attribute_names().as_ref().unwrap();
        assert_eq!(names["#key"], "count");
        let values = builder.get_expression_attribute_values().as_ref().unwrap();
        assert_eq!(values[":value"], AttributeValue::N("7".to_string()));
    }

    #[test]
    fn test_scan_input_missing_parameters() {
        assert_eq!(
            new_scan_input("", "k", "v").unwrap_err().param(),
            Some("table")
        );
        assert_eq!(
            new_scan_input("t", "", "v").unwrap_err().param(),
            Some("key_name")
        );
        assert_eq!(
            new_scan_input("t", "k", &Option::<String>::None)
                .unwrap_err()
                .param(),
            Some("key_value")
        );
        assert_eq!(
            new_scan_input("t", "k", "").unwrap_err().param(),
            Some("key_value")
        );
    }

    #[test]
    fn test_put_then_get_roundtrip() {
        let original = record();
        let put = new_put_item_input(&original, "records").unwrap();
        let item = put.get_item().clone();

        let output = GetItemOutput::builder().set_item(item).build();
        let back: Record = unmarshal_get_item_output(&output).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_get_item_output_without_item() {
        let output = GetItemOutput::builder().build();
        let err = unmarshal_get_item_output::<Record>(&output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResult);
    }

    #[test]
    fn test_scan_output_unmarshals_every_item() {
        let first = marshal_item(&record()).unwrap();
        let second = marshal_item(&Record {
            some_param: "secondary".to_string(),
            count: None,
        })
        .unwrap();

        let output = ScanOutput::builder().items(first).items(second).build();
        let records: Vec<Record> = unmarshal_scan_output(&output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].some_param, "secondary");
        assert_eq!(records[1].count, None);

        let empty: Vec<Record> = unmarshal_scan_output(&ScanOutput::builder().build()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_stream_image() {
        let image = marshal_item(&record()).unwrap();
        let back: Record = unmarshal_stream_image(&image).unwrap();
        assert_eq!(back, record());

        let err = unmarshal_stream_image::<Record>(&Item::new()).unwrap_err();
        assert_eq!(err.param(), Some("new_image"));
    }
}
