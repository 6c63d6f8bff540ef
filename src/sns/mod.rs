//! SNS bindings
//!
//! Messages are published with a JSON message structure: the payload is
//! serialized, then wrapped in the `default` field of a [`types::Body`].

pub mod client;
pub mod request;
pub mod types;

pub use client::SnsClient;
pub use request::{new_publish_input, to_message_attributes, unmarshal_message};
pub use types::Body;
