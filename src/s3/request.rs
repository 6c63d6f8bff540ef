//! S3 request builders and response unmarshalers

use std::fs;
use std::path::Path;

use aws_sdk_s3::operation::create_bucket::builders::CreateBucketInputBuilder;
use aws_sdk_s3::operation::create_bucket::CreateBucketInput;
use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
use aws_sdk_s3::operation::get_object::{GetObjectInput, GetObjectOutput};
use aws_sdk_s3::operation::put_object::builders::PutObjectInputBuilder;
use aws_sdk_s3::operation::put_object::PutObjectInput;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{Error, Result};
use crate::s3::types::{ReadImageOutput, DEFAULT_CONTENT_TYPE};

/// Build a create-bucket request
pub fn new_create_bucket_input(bucket: &str) -> Result<CreateBucketInputBuilder> {
    if bucket.is_empty() {
        return Err(Error::empty("bucket"));
    }

    Ok(CreateBucketInput::builder().bucket(bucket))
}

/// Build a get-object request for `source` in `bucket`
pub fn new_get_object_input(bucket: &str, source: &str) -> Result<GetObjectInputBuilder> {
    if bucket.is_empty() {
        return Err(Error::empty("bucket"));
    }
    if source.is_empty() {
        return Err(Error::empty("source"));
    }

    Ok(GetObjectInput::builder().bucket(bucket).key(source))
}

/// Build a put-object request uploading `image` as `file_name`
pub fn new_put_object_input(
    bucket: &str,
    file_name: &str,
    content_type: &str,
    image: &[u8],
    size: i64,
) -> Result<PutObjectInputBuilder> {
    if bucket.is_empty() {
        return Err(Error::empty("bucket"));
    }
    if file_name.is_empty() {
        return Err(Error::empty("file_name"));
    }
    if content_type.is_empty() {
        return Err(Error::empty("content_type"));
    }
    if image.is_empty() {
        return Err(Error::empty("image"));
    }
    if size <= 0 {
        return Err(Error::empty("size"));
    }
    if usize::try_from(size).ok() != Some(image.len()) {
        return Err(Error::ContentLengthMismatch {
            param: "size",
            size,
            actual: image.len(),
        });
    }

    Ok(PutObjectInput::builder()
        .bucket(bucket)
        .key(file_name)
        .content_type(content_type)
        .body(ByteStream::from(image.to_vec()))
        .content_length(size))
}

/// Collect the body of a get-object response
pub async fn unmarshal_get_object_output(output: GetObjectOutput) -> Result<Vec<u8>> {
    if output.content_length() == Some(0) {
        return Err(Error::EmptyContentLength {
            param: "content_length",
        });
    }

    let data = output
        .body
        .collect()
        .await
        .map_err(|e| Error::Sdk(Box::new(e)))?;

    let body = data.into_bytes().to_vec();
    if body.is_empty() {
        return Err(Error::EmptyBody { param: "body" });
    }

    Ok(body)
}

/// Read a local file and detect its content type from its first bytes
pub fn read_image(path: impl AsRef<Path>) -> Result<ReadImageOutput> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::empty("path"));
    }

    let body = fs::read(path)?;
    let content_type = detect_content_type(&body);
    let content_size = body.len() as i64;

    tracing::debug!(
        "Read {:?}: {} bytes of {}",
        path,
        content_size,
        content_type
    );

    Ok(ReadImageOutput::default()
        .set_body(body)
        .set_content_type(content_type)
        .set_content_size(content_size))
}

fn detect_content_type(data: &[u8]) -> &'static str {
    image::guess_format(data)
        .map(|format| format.to_mime_type())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
