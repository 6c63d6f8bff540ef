//! DynamoDB client wrapper

use aws_sdk_dynamodb::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dynamodb::request::{
    new_get_item_input, new_put_item_input, new_scan_input, unmarshal_get_item_output,
    unmarshal_scan_output,
};
use crate::error::Result;
use crate::session::{endpoint_override, Session};

/// DynamoDB client wrapper with typed put/get/scan
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    client: Client,
}

impl DynamoDbClient {
    /// Create a client from a session, optionally overriding the endpoint
    pub fn new(session: &Session, endpoint: Option<&str>) -> Result<Self> {
        let mut builder = aws_sdk_dynamodb::config::Builder::from(session.config());

        if let Some(endpoint) = endpoint_override(endpoint)? {
            tracing::debug!("DynamoDB endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    /// Wrap an existing SDK client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying SDK client, for operations this wrapper does not cover
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Store `input` as an item in `table`
    pub async fn put_item<T: Serialize>(&self, input: &T, table: &str) -> Result<()> {
        let request = new_put_item_input(input, table)?;
        request.send_with(&self.client).await?;

        tracing::info!("Put item into table {}", table);
        Ok(())
    }

    /// Fetch the item whose string key `key_name` equals `key_value`
    pub async fn get_item<T: DeserializeOwned>(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<T> {
        let request = new_get_item_input(table, key_name, key_value)?;
        let output = request.send_with(&self.client).await?;

        tracing::debug!("Got item {}={} from table {}", key_name, key_value, table);
        unmarshal_get_item_output(&output)
    }

    /// Scan `table` for items whose `key_name` attribute equals `key_value`.
    ///
    /// Only the first page returned by DynamoDB is read.
    pub async fn scan<T, V>(&self, table: &str, key_name: &str, key_value: &V) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        V: Serialize + ?Sized,
    {
        let request = new_scan_input(table, key_name, key_value)?;
        let output = request.send_with(&self.client).await?;

        if output.last_evaluated_key().is_some() {
            tracing::warn!("Scan of table {} returned a partial page", table);
        }

        unmarshal_scan_output(&output)
    }
}
