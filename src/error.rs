//! Error type shared by every service wrapper
//!
//! Validation failures carry the name of the offending parameter so the
//! rendered message reads `"<param>: <kind>"`. Errors coming out of the AWS
//! SDK are boxed as-is and can be downcast by the caller.

use std::path::PathBuf;

use aws_sdk_s3::error::{BuildError, SdkError};
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{param}: empty parameter")]
    EmptyParameter { param: &'static str },

    #[error("{param}: similarity must be greater than 0 and at most 100")]
    BadSimilarity { param: &'static str },

    #[error("{param}: empty result")]
    EmptyResult { param: &'static str },

    #[error("{param}: empty content length")]
    EmptyContentLength { param: &'static str },

    #[error("{param}: empty body")]
    EmptyBody { param: &'static str },

    #[error("{param}: {size} does not match the body length {actual}")]
    ContentLengthMismatch {
        param: &'static str,
        size: i64,
        actual: usize,
    },

    #[error("{name}: {kind} is not a supported attribute type")]
    UnsupportedAttributeType { name: String, kind: &'static str },

    #[error("no region provided")]
    NoRegion,

    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read configuration from {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to build request: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Sdk(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Kind of an [`Error`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyParameter,
    BadSimilarity,
    EmptyResult,
    EmptyContentLength,
    EmptyBody,
    ContentLengthMismatch,
    UnsupportedAttributeType,
    NoRegion,
    InvalidEndpoint,
    Config,
    Json,
    Io,
    Build,
    Sdk,
}

impl Error {
    pub(crate) fn empty(param: &'static str) -> Self {
        Error::EmptyParameter { param }
    }

    pub(crate) fn unsupported(name: impl Into<String>, kind: &'static str) -> Self {
        Error::UnsupportedAttributeType {
            name: name.into(),
            kind,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyParameter { .. } => ErrorKind::EmptyParameter,
            Error::BadSimilarity { .. } => ErrorKind::BadSimilarity,
            Error::EmptyResult { .. } => ErrorKind::EmptyResult,
            Error::EmptyContentLength { .. } => ErrorKind::EmptyContentLength,
            Error::EmptyBody { .. } => ErrorKind::EmptyBody,
            Error::ContentLengthMismatch { .. } => ErrorKind::ContentLengthMismatch,
            Error::UnsupportedAttributeType { .. } => ErrorKind::UnsupportedAttributeType,
            Error::NoRegion => ErrorKind::NoRegion,
            Error::InvalidEndpoint { .. } => ErrorKind::InvalidEndpoint,
            Error::Config { .. } => ErrorKind::Config,
            Error::Json(_) => ErrorKind::Json,
            Error::Io(_) => ErrorKind::Io,
            Error::Build(_) => ErrorKind::Build,
            Error::Sdk(_) => ErrorKind::Sdk,
        }
    }

    /// Name of the parameter a validation error refers to
    pub fn param(&self) -> Option<&str> {
        match self {
            Error::EmptyParameter { param }
            | Error::BadSimilarity { param }
            | Error::EmptyResult { param }
            | Error::EmptyContentLength { param }
            | Error::EmptyBody { param }
            | Error::ContentLengthMismatch { param, .. } => Some(*param),
            Error::UnsupportedAttributeType { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

// Every aws-sdk-* crate re-exports the same smithy `SdkError`, so this covers
// all five services.
impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(error: SdkError<E, R>) -> Self {
        Error::Sdk(Box::new(error))
    }
}
