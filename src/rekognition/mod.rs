//! Rekognition bindings
//!
//! Images are sent inline as bytes. Responses are converted into the types in
//! [`types`], which do not depend on the SDK.

pub mod client;
pub mod request;
pub mod types;

pub use client::RekognitionClient;
pub use request::{
    new_compare_faces_input, new_detect_faces_input, new_detect_text_input,
    unmarshal_compare_faces_output, unmarshal_detect_faces_output, unmarshal_detect_text_output,
};
pub use types::{
    AgeRange, BoolAttribute, CompareFacesResult, DetectFacesResult, DetectTextResult, Face,
    FaceDetail, FaceMatch, Quality, StringAttribute, TextDetection,
};
