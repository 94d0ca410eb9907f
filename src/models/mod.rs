// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PhotoRef, ProcessedPhoto, LandmarkName, LandmarkPoint, LandmarkSet, MeasurementUnit, MeasurementSet, BodyType};
pub use requests::{BackgroundRemovalRequest, PoseDetectionRequest, MeasurementExtractionRequest, BodyTypeClassificationRequest, BodyMeasurements};
pub use responses::{HealthResponse, BackgroundRemovalResponse, PoseDetectionResponse, MeasurementExtractionResponse, BodyTypeClassificationResponse, ErrorResponse};
