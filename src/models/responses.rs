use serde::{Deserialize, Serialize};
use crate::models::domain::{BodyType, LandmarkSet, MeasurementSet, ProcessedPhoto};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundRemovalResponse {
    #[serde(rename = "processedPhotos")]
    pub processed_photos: Vec<ProcessedPhoto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseDetectionResponse {
    pub landmarks: LandmarkSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementExtractionResponse {
    pub measurements: MeasurementSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyTypeClassificationResponse {
    #[serde(rename = "bodyType")]
    pub body_type: BodyType,
    pub confidence: f64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
