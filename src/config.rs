//! Configuration file for the bindings
//!
//! A small JSON document naming the region and per-service settings:
//!
//! ```json
//! {
//!   "region": "eu-west-1",
//!   "dynamodb": { "table_name": "items", "primary_key": "id" },
//!   "s3": { "endpoint": "http://localhost:9000", "bucket": "images" }
//! }
//! ```
//!
//! The path is taken from `AWS_BINDINGS_CONFIG` by [`Configuration::from_env`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::session::SessionInput;

/// Environment variable holding the configuration file path
pub const CONFIG_PATH_ENV: &str = "AWS_BINDINGS_CONFIG";

/// Environment variable consulted for the region when no file is configured
pub const REGION_ENV: &str = "AWS_REGION";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub region: String,

    /// Named profile from ~/.aws/config
    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub dynamodb: DynamoDbSettings,

    #[serde(default)]
    pub s3: S3Settings,

    #[serde(default)]
    pub sns: SnsSettings,

    #[serde(default)]
    pub sqs: SqsSettings,

    #[serde(default)]
    pub rekognition: RekognitionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DynamoDbSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub primary_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct S3Settings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SnsSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub target_arn: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SqsSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub queue_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RekognitionSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Configuration {
    /// Load the configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e.into()),
        })?;

        let config: Configuration = serde_json::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e.into()),
        })?;

        tracing::info!(
            "Loaded configuration from {:?}: region={}, profile={:?}",
            path,
            config.region,
            config.profile
        );

        Ok(config)
    }

    /// Load the file named by `AWS_BINDINGS_CONFIG`, or fall back to a
    /// configuration holding only the `AWS_REGION` region.
    pub fn from_env() -> Result<Self> {
        match Self::env_path() {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("{} not set, using defaults", CONFIG_PATH_ENV);
                Ok(Self {
                    region: env::var(REGION_ENV).unwrap_or_default(),
                    ..Self::default()
                })
            }
        }
    }

    fn env_path() -> Option<PathBuf> {
        env::var_os(CONFIG_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Build the session input this configuration describes
    pub fn session_input(&self) -> Result<SessionInput> {
        let input = SessionInput::new(&self.region)?;
        Ok(match &self.profile {
            Some(profile) => input.with_profile(profile),
            None => input,
        })
    }
}
