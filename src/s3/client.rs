//! AWS S3 client wrapper

use aws_sdk_s3::Client;

use crate::error::Result;
use crate::s3::request::{
    new_create_bucket_input, new_get_object_input, new_put_object_input,
    unmarshal_get_object_output,
};
use crate::session::{endpoint_override, Session};

/// S3 client wrapper with high-level operations
#[derive(Debug, Clone)]
pub struct S3Client {
    client: Client,
    current_region: String,
}

impl S3Client {
    /// Create a client from a session, optionally overriding the endpoint.
    ///
    /// An overridden endpoint (MinIO, LocalStack) is addressed path-style.
    pub fn new(session: &Session, endpoint: Option<&str>) -> Result<Self> {
        let mut builder = aws_sdk_s3::config::Builder::from(session.config());

        if let Some(endpoint) = endpoint_override(endpoint)? {
            tracing::debug!("S3 endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            current_region: session.region().to_string(),
        })
    }

    /// The underlying SDK client, for operations this wrapper does not cover
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Create a bucket
    pub async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let request = new_create_bucket_input(bucket)?;
        request.send_with(&self.client).await?;

        tracing::info!("Created bucket {}", bucket);
        Ok(())
    }

    /// Upload bytes as an object
    pub async fn put_object(
        &self,
        bucket: &str,
        file_name: &str,
        content_type: &str,
        image: &[u8],
        size: i64,
    ) -> Result<()> {
        let request = new_put_object_input(bucket, file_name, content_type, image, size)?;
        request.send_with(&self.client).await?;

        tracing::info!("Uploaded s3://{}/{} ({} bytes)", bucket, file_name, size);
        Ok(())
    }

    /// Download an object to bytes
    pub async fn get_object(&self, bucket: &str, source: &str) -> Result<Vec<u8>> {
        let request = new_get_object_input(bucket, source)?;
        let output = request.send_with(&self.client).await?;

        unmarshal_get_object_output(output).await
    }

    /// Get the current region
    pub fn region(&self) -> &str {
        &self.current_region
    }
}
