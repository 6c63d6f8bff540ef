//! Rekognition result types
//!
//! Provider-independent shapes for the parts of the Rekognition responses
//! callers usually need. They serialize with the same PascalCase field names
//! the Rekognition API uses.

use serde::{Deserialize, Serialize};

/// Faces found by CompareFaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFacesResult {
    #[serde(default)]
    pub face_matches: Vec<FaceMatch>,
    #[serde(default)]
    pub unmatched_faces: Vec<Face>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesResult {
    #[serde(default)]
    pub face_details: Vec<FaceDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectTextResult {
    #[serde(default)]
    pub text_detections: Vec<TextDetection>,
}

/// A target face matching the source face
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceMatch {
    #[serde(default)]
    pub face: Face,
    #[serde(default)]
    pub similarity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Face {
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub quality: Quality,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    #[serde(default)]
    pub age_range: AgeRange,
    #[serde(default)]
    pub beard: BoolAttribute,
    #[serde(default)]
    pub eyeglasses: BoolAttribute,
    #[serde(default)]
    pub eyes_open: BoolAttribute,
    #[serde(default)]
    pub gender: StringAttribute,
    #[serde(default)]
    pub mouth_open: BoolAttribute,
    #[serde(default)]
    pub mustache: BoolAttribute,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default)]
    pub sunglasses: BoolAttribute,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDetection {
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub detected_text: String,
    #[serde(default)]
    pub id: i64,
    /// `LINE` or `WORD`
    #[serde(default, rename = "Type")]
    pub text_type: String,
}

/// Estimated age range, in years
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgeRange {
    #[serde(default)]
    pub high: i64,
    #[serde(default)]
    pub low: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoolAttribute {
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringAttribute {
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quality {
    #[serde(default)]
    pub brightness: f64,
    #[serde(default)]
    pub sharpness: f64,
}
