//! SNS data types

use serde::{Deserialize, Serialize};

/// `MessageStructure` value telling SNS the message is a JSON envelope
pub const MESSAGE_STRUCTURE: &str = "json";

/// Message attribute data types understood by SNS
pub const ATTRIBUTE_STRING: &str = "String";
pub const ATTRIBUTE_STRING_ARRAY: &str = "String.Array";
pub const ATTRIBUTE_NUMBER: &str = "Number";
pub const ATTRIBUTE_BINARY: &str = "Binary";

/// Message envelope. With a JSON message structure SNS delivers the
/// `default` string to every protocol without an explicit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub default: String,
}
