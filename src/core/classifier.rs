use crate::models::{BodyMeasurements, BodyType};

pub const CLASSIFICATION_CONFIDENCE: f64 = 0.87;

/// Ratio thresholds and fallbacks for missing measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationThresholds {
    pub hourglass_waist_hip_max: f64,
    pub inverted_triangle_shoulder_hip_min: f64,
    pub rectangle_waist_hip_min: f64,
    pub default_waist: f64,
    pub default_hip: f64,
    pub default_shoulder: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            hourglass_waist_hip_max: 0.75,
            inverted_triangle_shoulder_hip_min: 0.5,
            rectangle_waist_hip_min: 0.85,
            default_waist: 80.0,
            default_hip: 100.0,
            default_shoulder: 45.0,
        }
    }
}

/// Outcome of a classification, before it is shaped into a response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub body_type: BodyType,
    pub confidence: f64,
    pub waist_to_hip: f64,
    pub shoulder_to_hip: f64,
}

/// Threshold-based body type classifier
///
/// # Decision order
/// First match wins:
/// 1. waist/hip below the hourglass maximum
/// 2. shoulder/hip above the inverted-triangle minimum
/// 3. waist/hip above the rectangle minimum
/// 4. pear
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyTypeClassifier {
    thresholds: ClassificationThresholds,
}

impl BodyTypeClassifier {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    /// Classify from a measurement object, filling in fallbacks for absent fields
    pub fn classify(&self, measurements: &BodyMeasurements) -> Classification {
        let t = &self.thresholds;
        let waist = measurements.waist_circumference.unwrap_or(t.default_waist);
        let hip = measurements.hip_circumference.unwrap_or(t.default_hip);
        let shoulder = measurements.shoulder_width.unwrap_or(t.default_shoulder);

        self.classify_values(waist, hip, shoulder)
    }

    /// `hip` must be positive; callers validate this first
    pub fn classify_values(&self, waist: f64, hip: f64, shoulder: f64) -> Classification {
        let t = &self.thresholds;
        let waist_to_hip = waist / hip;
        let shoulder_to_hip = shoulder / hip;

        let body_type = if waist_to_hip < t.hourglass_waist_hip_max {
            BodyType::Hourglass
        } else if shoulder_to_hip > t.inverted_triangle_shoulder_hip_min {
            BodyType::InvertedTriangle
        } else if waist_to_hip > t.rectangle_waist_hip_min {
            BodyType::Rectangle
        } else {
            BodyType::Pear
        };

        Classification {
            body_type,
            confidence: CLASSIFICATION_CONFIDENCE,
            waist_to_hip,
            shoulder_to_hip,
        }
    }
}
