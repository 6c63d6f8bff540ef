//! S3 data types

use serde::{Deserialize, Serialize};

/// MIME type used when the content of a file is not recognised
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A local image read into memory, ready to be uploaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadImageOutput {
    /// Raw file contents
    pub body: Vec<u8>,
    /// MIME type detected from the file's magic bytes
    pub content_type: String,
    /// Body size in bytes
    pub content_size: i64,
}

impl ReadImageOutput {
    pub fn set_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn set_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn set_content_size(mut self, content_size: i64) -> Self {
        self.content_size = content_size;
        self
    }

    /// Whether the detected content type is an image format
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
