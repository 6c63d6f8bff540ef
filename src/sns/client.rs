//! SNS client wrapper

use std::collections::HashMap;

use aws_sdk_sns::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::session::{endpoint_override, Session};
use crate::sns::request::new_publish_input;

/// SNS client wrapper publishing JSON envelopes
#[derive(Debug, Clone)]
pub struct SnsClient {
    client: Client,
}

impl SnsClient {
    /// Create a client from a session, optionally overriding the endpoint
    pub fn new(session: &Session, endpoint: Option<&str>) -> Result<Self> {
        let mut builder = aws_sdk_sns::config::Builder::from(session.config());

        if let Some(endpoint) = endpoint_override(endpoint)? {
            tracing::debug!("SNS endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Publish `input` on `target_arn`. Returns the message id assigned by SNS.
    pub async fn publish<T: Serialize + ?Sized>(
        &self,
        input: &T,
        message_attributes: &HashMap<String, Value>,
        target_arn: &str,
    ) -> Result<Option<String>> {
        let request = new_publish_input(input, message_attributes, target_arn)?;
        let output = request.send_with(&self.client).await?;

        let message_id = output.message_id().map(|id| id.to_string());
        tracing::info!("Published message {:?} to {}", message_id, target_arn);

        Ok(message_id)
    }
}
