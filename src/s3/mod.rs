//! S3 client wrapper module
//!
//! This module provides AWS S3 functionality including:
//! - [`client::S3Client`] - High-level S3 operations wrapper
//! - [`request`] - request builders, response unmarshalers and local image reading
//! - [`types`] - S3 data types (ReadImageOutput)

pub mod client;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use client::S3Client;
pub use request::{
    new_create_bucket_input, new_get_object_input, new_put_object_input, read_image,
    unmarshal_get_object_output,
};
pub use types::ReadImageOutput;
