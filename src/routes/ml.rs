use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::config::Settings;
use crate::core::{self, BodyTypeClassifier, RandomSource, ThreadRandom};
use crate::error::ServiceError;
use crate::models::{
    BackgroundRemovalRequest, BackgroundRemovalResponse, BodyTypeClassificationRequest,
    BodyTypeClassificationResponse, HealthResponse, MeasurementExtractionRequest,
    MeasurementExtractionResponse, PoseDetectionRequest, PoseDetectionResponse,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub random: Arc<dyn RandomSource>,
    pub classifier: BodyTypeClassifier,
}

impl AppState {
    pub fn new(service_name: impl Into<String>, random: Arc<dyn RandomSource>, classifier: BodyTypeClassifier) -> Self {
        Self {
            service_name: service_name.into(),
            random,
            classifier,
        }
    }

    /// Production state: thread-local randomness and configured thresholds
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.service.name.clone(),
            Arc::new(ThreadRandom),
            BodyTypeClassifier::new((&settings.classification).into()),
        )
    }
}

/// Configure all model routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/background-removal", web::post().to(remove_background))
        .route("/pose-detection", web::post().to(detect_pose))
        .route("/measurement-extraction", web::post().to(extract_measurements))
        .route("/body-type-classification", web::post().to(classify_body_type));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.clone(),
    })
}

/// Background removal endpoint (stub)
///
/// POST /background-removal
///
/// Request body:
/// ```json
/// { "photos": [{ "url": "https://.../front.jpg", "type": "front" }] }
/// ```
async fn remove_background(
    req: web::Json<BackgroundRemovalRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;

    tracing::info!("Processing {} photos for background removal", req.photos.len());

    let processed_photos = core::remove_backgrounds(&req.photos);

    tracing::info!("Background removal completed for {} photos", processed_photos.len());

    Ok(HttpResponse::Ok().json(BackgroundRemovalResponse { processed_photos }))
}

/// Pose detection endpoint (stub)
///
/// POST /pose-detection
///
/// Always answers with the full 33-point landmark set, whatever the photo count.
async fn detect_pose(
    state: web::Data<AppState>,
    req: web::Json<PoseDetectionRequest>,
) -> Result<HttpResponse, ServiceError> {
    tracing::info!("Detecting pose for {} photos", req.photos.len());

    let landmarks = core::detect_pose(state.random.as_ref());

    tracing::info!("Pose detection completed");

    Ok(HttpResponse::Ok().json(PoseDetectionResponse { landmarks }))
}

/// Measurement extraction endpoint (stub)
///
/// POST /measurement-extraction
///
/// Request body:
/// ```json
/// { "landmarks": { "points": [...], "averageConfidence": 0.92 }, "unit": "imperial" }
/// ```
async fn extract_measurements(
    state: web::Data<AppState>,
    req: web::Json<MeasurementExtractionRequest>,
) -> Result<HttpResponse, ServiceError> {
    if req.landmarks.is_null() {
        return Err(ServiceError::Validation("landmarks: field is required".to_string()));
    }

    tracing::info!("Extracting measurements in {} units", req.unit);

    let measurements = core::extract_measurements(state.random.as_ref(), req.unit);

    tracing::info!("Measurement extraction completed");

    Ok(HttpResponse::Ok().json(MeasurementExtractionResponse { measurements }))
}

/// Body type classification endpoint
///
/// POST /body-type-classification
///
/// Request body:
/// ```json
/// { "measurements": { "waistCircumference": 70, "hipCircumference": 100, "shoulderWidth": 45 } }
/// ```
async fn classify_body_type(
    state: web::Data<AppState>,
    req: web::Json<BodyTypeClassificationRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;

    tracing::info!("Classifying body type");

    let result = state.classifier.classify(&req.measurements);

    tracing::info!(
        waist_to_hip = result.waist_to_hip,
        shoulder_to_hip = result.shoulder_to_hip,
        "Body type classified as: {}",
        result.body_type
    );

    Ok(HttpResponse::Ok().json(BodyTypeClassificationResponse {
        body_type: result.body_type,
        confidence: result.confidence,
    }))
}
