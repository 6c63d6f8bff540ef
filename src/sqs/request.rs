//! SQS request builders and response unmarshalers

use aws_sdk_sqs::operation::delete_message::builders::DeleteMessageInputBuilder;
use aws_sdk_sqs::operation::delete_message::DeleteMessageInput;
use aws_sdk_sqs::operation::receive_message::builders::ReceiveMessageInputBuilder;
use aws_sdk_sqs::operation::receive_message::{ReceiveMessageInput, ReceiveMessageOutput};
use aws_sdk_sqs::operation::send_message::builders::SendMessageInputBuilder;
use aws_sdk_sqs::operation::send_message::SendMessageInput;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Upper bound SQS accepts for a single receive call
pub const MAX_RECEIVE_MESSAGES: i32 = 10;

/// A message read from a queue.
///
/// The body is decoded per message, so a message that cannot be decoded
/// still carries its receipt handle and can be deleted.
#[derive(Debug)]
pub struct ReceivedMessage<T> {
    pub message_id: Option<String>,
    /// Handle needed to delete the message once processed
    pub receipt_handle: Option<String>,
    pub body: Result<T>,
}

/// Build a send-message request carrying `input` as a JSON body
pub fn new_send_message_input<T: Serialize + ?Sized>(
    input: &T,
    queue_url: &str,
) -> Result<SendMessageInputBuilder> {
    if queue_url.is_empty() {
        return Err(Error::empty("queue_url"));
    }

    let body = serde_json::to_string(input)?;

    Ok(SendMessageInput::builder()
        .queue_url(queue_url)
        .message_body(body))
}

/// Build a receive-message request. `max_messages` is clamped to 1..=10.
pub fn new_receive_message_input(
    queue_url: &str,
    max_messages: i32,
) -> Result<ReceiveMessageInputBuilder> {
    if queue_url.is_empty() {
        return Err(Error::empty("queue_url"));
    }

    Ok(ReceiveMessageInput::builder()
        .queue_url(queue_url)
        .max_number_of_messages(max_messages.clamp(1, MAX_RECEIVE_MESSAGES)))
}

/// Build a delete-message request
pub fn new_delete_message_input(
    queue_url: &str,
    receipt_handle: &str,
) -> Result<DeleteMessageInputBuilder> {
    if queue_url.is_empty() {
        return Err(Error::empty("queue_url"));
    }
    if receipt_handle.is_empty() {
        return Err(Error::empty("receipt_handle"));
    }

    Ok(DeleteMessageInput::builder()
        .queue_url(queue_url)
        .receipt_handle(receipt_handle))
}

/// Decode the JSON body of every received message
pub fn unmarshal_receive_message_output<T: DeserializeOwned>(
    output: &ReceiveMessageOutput,
) -> Vec<ReceivedMessage<T>> {
    output
        .messages()
        .iter()
        .map(|message| ReceivedMessage {
            message_id: message.message_id().map(|s| s.to_string()),
            receipt_handle: message.receipt_handle().map(|s| s.to_string()),
            body: decode_body(message.body()),
        })
        .collect()
}

fn decode_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T> {
    let body = body
        .filter(|b| !b.is_empty())
        .ok_or(Error::EmptyBody { param: "body" })?;
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use aws_sdk_sqs::types::Message;
    use serde::Deserialize;

    const QUEUE: &str = "https://sqs.eu-west-1.amazonaws.com/000000000000/jobs";

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Job {
        name: String,
        attempt: u8,
    }

    #[test]
    fn test_send_message_input() {
        let job = Job {
            name: "resize".to_string(),
            attempt: 1,
        };
        let builder = new_send_message_input(&job, QUEUE).unwrap();
        assert_eq!(builder.get_queue_url().as_deref(), Some(QUEUE));
        assert_eq!(
            builder.get_message_body().as_deref(),
            Some(r#"{"name":"resize","attempt":1}"#)
        );

        let err = new_send_message_input(&job, "").unwrap_err();
        assert_eq!(err.param(), Some("queue_url"));
    }

    #[test]
    fn test_receive_message_input_clamps() {
        let builder = new_receive_message_input(QUEUE, 50).unwrap();
        assert_eq!(*builder.get_max_number_of_messages(), Some(10));

        let builder = new_receive_message_input(QUEUE, 0).unwrap();
        assert_eq!(*builder.get_max_number_of_messages(), Some(1));

        assert_eq!(
            new_receive_message_input("", 1).unwrap_err().param(),
            Some("queue_url")
        );
    }

    #[test]
    fn test_delete_message_input() {
        let builder = new_delete_message_input(QUEUE, "handle-1").unwrap();
        assert_eq!(builder.get_receipt_handle().as_deref(), Some("handle-1"));
        assert_eq!(
            new_delete_message_input(QUEUE, "").unwrap_err().param(),
            Some("receipt_handle")
        );
    }

    #[test]
    fn test_unmarshal_receive_message_output() {
        let output = ReceiveMessageOutput::builder()
            .messages(
                Message::builder()
                    .message_id("m-1")
                    .receipt_handle("r-1")
                    .body(r#"{"name":"resize","attempt":2}"#)
                    .build(),
            )
            .build();

        let messages: Vec<ReceivedMessage<Job>> = unmarshal_receive_message_output(&output);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message_id.as_deref(), Some("m-1"));
        assert_eq!(messages[0].receipt_handle.as_deref(), Some("r-1"));
        assert_eq!(messages[0].body.as_ref().unwrap().attempt, 2);
    }

    #[test]
    fn test_undecodable_message_keeps_batch_and_handle() {
        let output = ReceiveMessageOutput::builder()
            .messages(
                Message::builder()
                    .receipt_handle("r-good")
                    .body(r#"{"name":"resize","attempt":1}"#)
                    .build(),
            )
            .messages(
                Message::builder()
                    .receipt_handle("r-bad")
                    .body("not json")
                    .build(),
            )
            .build();

        let messages = unmarshal_receive_message_output::<Job>(&output);
        assert_eq!(messages.len(), 2);

        assert_eq!(messages[0].receipt_handle.as_deref(), Some("r-good"));
        assert_eq!(messages[0].body.as_ref().unwrap().name, "resize");

        assert_eq!(messages[1].receipt_handle.as_deref(), Some("r-bad"));
        let err = messages[1].body.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Json);
    }

    #[test]
    fn test_unmarshal_message_without_body() {
        let output = ReceiveMessageOutput::builder()
            .messages(Message::builder().message_id("m-1").build())
            .build();

        let messages = unmarshal_receive_message_output::<Job>(&output);
        assert_eq!(messages[0].message_id.as_deref(), Some("m-1"));
        let err = messages[0].body.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyBody);
    }

    #[test]
    fn test_unmarshal_no_messages() {
        let output = ReceiveMessageOutput::builder().build();
        let messages = unmarshal_receive_message_output::<Job>(&output);
        assert!(messages.is_empty());
    }
}
