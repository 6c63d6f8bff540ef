//! AWS session factory
//!
//! A [`Session`] is the shared SDK configuration every service wrapper is
//! built from. It is always pinned to an explicit region; credentials come
//! from the default provider chain unless a profile or static keys are given.

use std::fmt;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;

use crate::error::{Error, Result};

const CREDENTIALS_PROVIDER_NAME: &str = "aws-sdk-bindings";

/// Static access keys, used instead of the default credential chain
#[derive(Clone)]
struct StaticCredentials {
    access_key_id: String,
    secret_access_key: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

/// Parameters needed to open a [`Session`]
#[derive(Debug, Clone)]
pub struct SessionInput {
    region: String,
    profile: Option<String>,
    credentials: Option<StaticCredentials>,
}

impl SessionInput {
    /// Create a session input for the given region
    pub fn new(region: &str) -> Result<Self> {
        if region.is_empty() {
            return Err(Error::NoRegion);
        }

        Ok(Self {
            region: region.to_string(),
            profile: None,
            credentials: None,
        })
    }

    /// Load credentials from a named profile in ~/.aws/config
    pub fn with_profile(mut self, profile: &str) -> Self {
        self.profile = Some(profile.to_string()).filter(|p| !p.is_empty());
        self
    }

    /// Use static access keys instead of the default credential chain
    pub fn with_credentials(mut self, access_key_id: &str, secret_access_key: &str) -> Self {
        self.credentials = Some(StaticCredentials {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        });
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

/// Shared SDK configuration for the service wrappers
#[derive(Debug, Clone)]
pub struct Session {
    config: SdkConfig,
    region: String,
}

impl Session {
    /// Load the SDK configuration described by `input`
    pub async fn new(input: SessionInput) -> Result<Self> {
        if input.region.is_empty() {
            return Err(Error::NoRegion);
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(input.region.clone()));

        if let Some(profile) = &input.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(creds) = input.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id,
                creds.secret_access_key,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));
        }

        let config = loader.load().await;

        tracing::debug!(
            "Opened AWS session: region={}, profile={:?}",
            input.region,
            input.profile
        );

        Ok(Self {
            config,
            region: input.region,
        })
    }

    /// Wrap an already loaded SDK configuration. It must carry a region.
    pub fn from_sdk_config(config: SdkConfig) -> Result<Self> {
        let region = config
            .region()
            .map(|r| r.to_string())
            .filter(|r| !r.is_empty())
            .ok_or(Error::NoRegion)?;

        Ok(Self { config, region })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Validate an optional per-service endpoint override.
///
/// `None` and the empty string both mean "use the default endpoint".
pub(crate) fn endpoint_override(endpoint: Option<&str>) -> Result<Option<String>> {
    match endpoint {
        None | Some("") => Ok(None),
        Some(endpoint) => {
            url::Url::parse(endpoint).map_err(|source| Error::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                source,
            })?;
            Ok(Some(endpoint.to_string()))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Offline session for unit tests, no credential chain lookups
    pub(crate) async fn test_session() -> Session {
        let input = SessionInput::new("eu-west-1")
            .unwrap()
            .with_credentials("test-access-key", "test-secret-key");
        Session::new(input).await.unwrap()
    }

    #[test]
    fn test_session_input_requires_region() {
        let err = SessionInput::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRegion);
    }

    #[test]
    fn test_session_input_with_profile() {
        let input = SessionInput::new("us-east-1").unwrap().with_profile("dev");
        assert_eq!(input.region(), "us-east-1");
        assert_eq!(input.profile(), Some("dev"));

        let input = SessionInput::new("us-east-1").unwrap().with_profile("");
        assert_eq!(input.profile(), None);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let input = SessionInput::new("us-east-1")
            .unwrap()
            .with_credentials("AKIDEXAMPLE", "very-secret");
        let rendered = format!("{:?}", input);
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("very-secret"));
    }

    #[tokio::test]
    async fn test_session_new_pins_region() {
        let session = test_session().await;
        assert_eq!(session.region(), "eu-west-1");
        assert_eq!(
            session.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }

    #[test]
    fn test_from_sdk_config_without_region() {
        let config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        let err = Session::from_sdk_config(config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRegion);
    }

    #[test]
    fn test_from_sdk_config_with_region() {
        let config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("ap-southeast-2"))
            .build();
        let session = Session::from_sdk_config(config).unwrap();
        assert_eq!(session.region(), "ap-southeast-2");
    }

    #[test]
    fn test_endpoint_override_empty_means_default() {
        assert_eq!(endpoint_override(None).unwrap(), None);
        assert_eq!(endpoint_override(Some("")).unwrap(), None);
    }

    #[test]
    fn test_endpoint_override_valid_url() {
        let endpoint = endpoint_override(Some("http://localhost:4566")).unwrap();
        assert_eq!(endpoint.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_endpoint_override_rejects_garbage() {
        let err = endpoint_override(Some("not a url")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEndpoint);
    }
}
