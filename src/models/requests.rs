use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MeasurementUnit, PhotoRef};

/// Request to strip backgrounds from a batch of photos
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BackgroundRemovalRequest {
    #[validate(nested)]
    pub photos: Vec<PhotoRef>,
}

/// Request to detect a body pose; photo contents are not inspected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseDetectionRequest {
    pub photos: Vec<serde_json::Value>,
}

/// Request to extract measurements from a landmark set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementExtractionRequest {
    pub landmarks: serde_json::Value,
    #[serde(default)]
    pub unit: MeasurementUnit,
}

/// Request to classify a body type
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BodyTypeClassificationRequest {
    #[validate(nested)]
    pub measurements: BodyMeasurements,
}

/// Measurements consulted by the classifier; anything else in the object is ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BodyMeasurements {
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "waistCircumference", default)]
    pub waist_circumference: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "hipCircumference", default)]
    pub hip_circumference: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "shoulderWidth", default)]
    pub shoulder_width: Option<f64>,
}
