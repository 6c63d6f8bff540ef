//! AWS SDK bindings
//!
//! Thin wrappers over the AWS SDK clients for DynamoDB, S3, SNS, SQS and
//! Rekognition. Every operation validates its parameters, builds the SDK
//! request, sends it, and converts the response into a caller-friendly type.
//!
//! ```rust,ignore
//! use aws_sdk_bindings::{dynamodb::DynamoDbClient, Session, SessionInput};
//!
//! let session = Session::new(SessionInput::new("eu-west-1")?).await?;
//! let dynamo = DynamoDbClient::new(&session, None)?;
//! dynamo.put_item(&order, "orders").await?;
//! let order: Order = dynamo.get_item("orders", "id", "order-1").await?;
//! ```

pub mod config;
pub mod dynamodb;
pub mod error;
pub mod rekognition;
pub mod s3;
pub mod session;
pub mod sns;
pub mod sqs;

pub use config::Configuration;
pub use error::{Error, ErrorKind, Result};
pub use session::{Session, SessionInput};
