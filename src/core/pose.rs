use crate::core::random::RandomSource;
use crate::models::{LandmarkName, LandmarkPoint, LandmarkSet};

/// Reported aggregate confidence
///
/// Fixed, not derived from the per-point confidences.
pub const AVERAGE_CONFIDENCE: f64 = 0.92;

pub const X_RANGE: (f64, f64) = (0.3, 0.7);
pub const Z_RANGE: (f64, f64) = (-0.05, 0.05);
pub const CONFIDENCE_RANGE: (f64, f64) = (0.85, 0.95);

/// Vertical position of the landmark at `index`, spread over [0.05, 0.95)
#[inline]
pub fn landmark_y(index: usize) -> f64 {
    (index as f64 / LandmarkName::COUNT as f64) * 0.9 + 0.05
}

/// Generate a full 33-point landmark set
///
/// Points follow the fixed anatomical order in [`LandmarkName::ALL`]. `x`,
/// `z` and `confidence` are drawn from `rng`; `y` depends only on the index.
pub fn detect_pose(rng: &dyn RandomSource) -> LandmarkSet {
    let points = LandmarkName::ALL
        .iter()
        .enumerate()
        .map(|(i, &name)| LandmarkPoint {
            x: rng.draw_uniform(X_RANGE.0, X_RANGE.1),
            y: landmark_y(i),
            z: rng.draw_uniform(Z_RANGE.0, Z_RANGE.1),
            confidence: rng.draw_uniform(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1),
            name,
        })
        .collect();

    LandmarkSet {
        points,
        average_confidence: AVERAGE_CONFIDENCE,
    }
}
