//! SQS client wrapper

use aws_sdk_sqs::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::session::{endpoint_override, Session};
use crate::sqs::request::{
    new_delete_message_input, new_receive_message_input, new_send_message_input,
    unmarshal_receive_message_output, ReceivedMessage,
};

/// SQS client wrapper sending and receiving JSON messages
#[derive(Debug, Clone)]
pub struct SqsClient {
    client: Client,
}

impl SqsClient {
    /// Create a client from a session, optionally overriding the endpoint
    pub fn new(session: &Session, endpoint: Option<&str>) -> Result<Self> {
        let mut builder = aws_sdk_sqs::config::Builder::from(session.config());

        if let Some(endpoint) = endpoint_override(endpoint)? {
            tracing::debug!("SQS endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Send `input` as a JSON message. Returns the message id.
    pub async fn send_message<T: Serialize + ?Sized>(
        &self,
        input: &T,
        queue_url: &str,
    ) -> Result<Option<String>> {
        let request = new_send_message_input(input, queue_url)?;
        let output = request.send_with(&self.client).await?;

        let message_id = output.message_id().map(|id| id.to_string());
        tracing::info!("Sent message {:?} to {}", message_id, queue_url);

        Ok(message_id)
    }

    /// Receive up to `max_messages` messages and decode their bodies.
    ///
    /// Messages are not deleted; call [`SqsClient::delete_message`] once handled.
    /// A body that fails to decode is reported on its own message, next to the
    /// receipt handle needed to delete it.
    pub async fn receive_messages<T: DeserializeOwned>(
        &self,
        queue_url: &str,
        max_messages: i32,
    ) -> Result<Vec<ReceivedMessage<T>>> {
        let request = new_receive_message_input(queue_url, max_messages)?;
        let output = request.send_with(&self.client).await?;

        let messages = unmarshal_receive_message_output(&output);
        tracing::debug!("Received {} messages from {}", messages.len(), queue_url);

        for message in messages.iter().filter(|m| m.body.is_err()) {
            tracing::warn!(
                "Message {:?} from {} has an undecodable body",
                message.message_id,
                queue_url
            );
        }

        Ok(messages)
    }

    /// Delete a handled message using its receipt handle
    pub async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> Result<()> {
        let request = new_delete_message_input(queue_url, receipt_handle)?;
        request.send_with(&self.client).await?;
        Ok(())
    }
}
