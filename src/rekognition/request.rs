//! Rekognition request builders and response unmarshalers

use aws_sdk_rekognition::operation::compare_faces::builders::CompareFacesInputBuilder;
use aws_sdk_rekognition::operation::compare_faces::{CompareFacesInput, CompareFacesOutput};
use aws_sdk_rekognition::operation::detect_faces::builders::DetectFacesInputBuilder;
use aws_sdk_rekognition::operation::detect_faces::{DetectFacesInput, DetectFacesOutput};
use aws_sdk_rekognition::operation::detect_text::builders::DetectTextInputBuilder;
use aws_sdk_rekognition::operation::detect_text::{DetectTextInput, DetectTextOutput};
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{self as sdk, Attribute, Image};

use crate::error::{Error, Result};
use crate::rekognition::types::{
    AgeRange, BoolAttribute, CompareFacesResult, DetectFacesResult, DetectTextResult, Face,
    FaceDetail, FaceMatch, Quality, StringAttribute, TextDetection,
};

/// Build a CompareFaces request. `similarity` is the minimum match
/// confidence, in percent.
pub fn new_compare_faces_input(
    source: &[u8],
    target: &[u8],
    similarity: f64,
) -> Result<CompareFacesInputBuilder> {
    if source.is_empty() {
        return Err(Error::empty("source"));
    }
    if target.is_empty() {
        return Err(Error::empty("target"));
    }
    if !(similarity > 0.0 && similarity <= 100.0) {
        return Err(Error::BadSimilarity {
            param: "similarity",
        });
    }

    Ok(CompareFacesInput::builder()
        .similarity_threshold(similarity as f32)
        .source_image(new_input_image(source)?)
        .target_image(new_input_image(target)?))
}

/// Build a DetectFaces request asking for every facial attribute
pub fn new_detect_faces_input(source: &[u8]) -> Result<DetectFacesInputBuilder> {
    if source.is_empty() {
        return Err(Error::empty("source"));
    }

    Ok(DetectFacesInput::builder()
        .image(new_input_image(source)?)
        .attributes(Attribute::All))
}

pub fn new_detect_text_input(source: &[u8]) -> Result<DetectTextInputBuilder> {
    if source.is_empty() {
        return Err(Error::empty("source"));
    }

    Ok(DetectTextInput::builder().image(new_input_image(source)?))
}

fn new_input_image(image: &[u8]) -> Result<Image> {
    if image.is_empty() {
        return Err(Error::empty("image"));
    }

    Ok(Image::builder().bytes(Blob::new(image)).build())
}

pub fn unmarshal_compare_faces_output(output: &CompareFacesOutput) -> Result<CompareFacesResult> {
    if output.face_matches.is_none() && output.unmatched_faces.is_none() {
        return Err(Error::EmptyResult {
            param: "compare_faces",
        });
    }

    Ok(CompareFacesResult {
        face_matches: output.face_matches().iter().map(face_match).collect(),
        unmatched_faces: output.unmatched_faces().iter().map(face).collect(),
    })
}

pub fn unmarshal_detect_faces_output(output: &DetectFacesOutput) -> Result<DetectFacesResult> {
    if output.face_details.is_none() {
        return Err(Error::EmptyResult {
            param: "detect_faces",
        });
    }

    Ok(DetectFacesResult {
        face_details: output.face_details().iter().map(face_detail).collect(),
    })
}

pub fn unmarshal_detect_text_output(output: &DetectTextOutput) -> Result<DetectTextResult> {
    if output.text_detections.is_none() {
        return Err(Error::EmptyResult {
            param: "detect_text",
        });
    }

    Ok(DetectTextResult {
        text_detections: output.text_detections().iter().map(text_detection).collect(),
    })
}

fn face_match(m: &sdk::CompareFacesMatch) -> FaceMatch {
    FaceMatch {
        face: m.face().map(face).unwrap_or_default(),
        similarity: percent(m.similarity()),
    }
}

fn face(f: &sdk::ComparedFace) -> Face {
    Face {
        confidence: percent(f.confidence()),
        quality: f.quality().map(quality).unwrap_or_default(),
    }
}

fn face_detail(d: &sdk::FaceDetail) -> FaceDetail {
    FaceDetail {
        age_range: d.age_range().map(age_range).unwrap_or_default(),
        beard: d
            .beard()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
        eyeglasses: d
            .eyeglasses()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
        eyes_open: d
            .eyes_open()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
        gender: d
            .gender()
            .map(|g| StringAttribute {
                confidence: percent(g.confidence()),
                value: g.value().map(|v| v.as_str().to_string()).unwrap_or_default(),
            })
            .unwrap_or_default(),
        mouth_open: d
            .mouth_open()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
        mustache: d
            .mustache()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
        confidence: percent(d.confidence()),
        quality: d.quality().map(quality).unwrap_or_default(),
        sunglasses: d
            .sunglasses()
            .map(|a| bool_attribute(a.value(), a.confidence()))
            .unwrap_or_default(),
    }
}

fn text_detection(t: &sdk::TextDetection) -> TextDetection {
    TextDetection {
        confidence: percent(t.confidence()),
        detected_text: t.detected_text().unwrap_or_default().to_string(),
        id: t.id().map(i64::from).unwrap_or_default(),
        text_type: t
            .r#type()
            .map(|kind| kind.as_str().to_string())
            .unwrap_or_default(),
    }
}

fn age_range(a: &sdk::AgeRange) -> AgeRange {
    AgeRange {
        high: a.high().map(i64::from).unwrap_or_default(),
        low: a.low().map(i64::from).unwrap_or_default(),
    }
}

fn quality(q: &sdk::ImageQuality) -> Quality {
    Quality {
        brightness: percent(q.brightness()),
        sharpness: percent(q.sharpness()),
    }
}

// SDK releases differ on whether attribute values are optional.
fn bool_attribute(
    value: impl Into<Option<bool>>,
    confidence: impl Into<Option<f32>>,
) -> BoolAttribute {
    BoolAttribute {
        confidence: percent(confidence),
        value: value.into().unwrap_or_default(),
    }
}

fn percent(value: impl Into<Option<f32>>) -> f64 {
    value.into().map(f64::from).unwrap_or_default()
}
