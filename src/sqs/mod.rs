//! SQS bindings

pub mod client;
pub mod request;

pub use client::SqsClient;
pub use request::{
    new_delete_message_input, new_receive_message_input, new_send_message_input,
    unmarshal_receive_message_output, ReceivedMessage,
};
