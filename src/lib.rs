//! Avatar ML - stub model service for the avatar generation pipeline
//!
//! Exposes background removal, pose detection, measurement extraction and
//! body-type classification over HTTP. Every model is a placeholder that
//! returns synthetic data in the shape the real models will produce.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{BodyTypeClassifier, ClassificationThresholds, FixedRandom, RandomSource, ThreadRandom};
pub use error::ServiceError;
pub use models::{BodyType, LandmarkSet, MeasurementSet, MeasurementUnit};
pub use routes::AppState;
