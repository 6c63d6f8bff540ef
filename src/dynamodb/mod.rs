//! DynamoDB bindings
//!
//! - [`client::DynamoDbClient`] - put/get/scan with serde types
//! - [`attribute`] - serde value <-> attribute value conversion
//! - [`request`] - request builders and response unmarshalers

pub mod attribute;
pub mod client;
pub mod request;

pub use attribute::{marshal_item, unmarshal_item, Item};
pub use client::DynamoDbClient;
pub use request::{
    new_get_item_input, new_put_item_input, new_scan_input, unmarshal_get_item_output,
    unmarshal_scan_output, unmarshal_stream_image,
};
