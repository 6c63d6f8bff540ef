//! Rekognition client wrapper

use aws_sdk_rekognition::Client;

use crate::error::Result;
use crate::rekognition::request::{
    new_compare_faces_input, new_detect_faces_input, new_detect_text_input,
    unmarshal_compare_faces_output, unmarshal_detect_faces_output, unmarshal_detect_text_output,
};
use crate::rekognition::types::{CompareFacesResult, DetectFacesResult, DetectTextResult};
use crate::session::{endpoint_override, Session};

/// Rekognition client wrapper for face and text detection on inline images
#[derive(Debug, Clone)]
pub struct RekognitionClient {
    client: Client,
}

impl RekognitionClient {
    /// Create a client from a session, optionally overriding the endpoint
    pub fn new(session: &Session, endpoint: Option<&str>) -> Result<Self> {
        let mut builder = aws_sdk_rekognition::config::Builder::from(session.config());

        if let Some(endpoint) = endpoint_override(endpoint)? {
            tracing::debug!("Rekognition endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Compare the largest face in `source` with every face in `target`
    pub async fn compare_faces(
        &self,
        source: &[u8],
        target: &[u8],
        similarity: f64,
    ) -> Result<CompareFacesResult> {
        let request = new_compare_faces_input(source, target, similarity)?;
        let output = request.send_with(&self.client).await?;

        let result = unmarshal_compare_faces_output(&output)?;
        tracing::info!(
            "CompareFaces: {} matches, {} unmatched",
            result.face_matches.len(),
            result.unmatched_faces.len()
        );

        Ok(result)
    }

    /// Detect faces in `source`, with every facial attribute
    pub async fn detect_faces(&self, source: &[u8]) -> Result<DetectFacesResult> {
        let request = new_detect_faces_input(source)?;
        let output = request.send_with(&self.client).await?;

        let result = unmarshal_detect_faces_output(&output)?;
        tracing::info!("DetectFaces: {} faces", result.face_details.len());

        Ok(result)
    }

    /// Detect lines and words of text in `source`
    pub async fn detect_text(&self, source: &[u8]) -> Result<DetectTextResult> {
        let request = new_detect_text_input(source)?;
        let output = request.send_with(&self.client).await?;

        let result = unmarshal_detect_text_output(&output)?;
        tracing::info!("DetectText: {} detections", result.text_detections.len());

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::session::tests::test_session;

    #[tokio::test]
    async fn test_empty_images_fail_without_network() {
        let session = test_session().await;
        let client = RekognitionClient::new(&session, Some("http://127.0.0.1:1")).unwrap();

        let err = client.compare_faces(&[], &[1], 90.0).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyParameter);

        let err = client.detect_faces(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyParameter);

        let err = client.detect_text(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyParameter);
    }
}
