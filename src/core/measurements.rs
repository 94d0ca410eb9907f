use crate::core::random::RandomSource;
use crate::models::{MeasurementSet, MeasurementUnit};

pub const MEASUREMENT_CONFIDENCE: f64 = 0.89;
pub const CM_PER_INCH: f64 = 2.54;

/// Metric (cm) range each stub measurement is drawn from
pub const HEIGHT_RANGE: (f64, f64) = (170.0, 190.0);
pub const SHOULDER_WIDTH_RANGE: (f64, f64) = (40.0, 50.0);
pub const CHEST_RANGE: (f64, f64) = (90.0, 105.0);
pub const WAIST_RANGE: (f64, f64) = (75.0, 90.0);
pub const HIP_RANGE: (f64, f64) = (95.0, 110.0);
pub const ARM_LENGTH_RANGE: (f64, f64) = (55.0, 65.0);
pub const INSEAM_RANGE: (f64, f64) = (75.0, 85.0);
pub const NECK_RANGE: (f64, f64) = (35.0, 40.0);
pub const THIGH_RANGE: (f64, f64) = (50.0, 60.0);

/// Ranges in the same order as [`MeasurementSet::lengths`]
pub const METRIC_RANGES: [(f64, f64); 9] = [
    HEIGHT_RANGE,
    SHOULDER_WIDTH_RANGE,
    CHEST_RANGE,
    WAIST_RANGE,
    HIP_RANGE,
    ARM_LENGTH_RANGE,
    INSEAM_RANGE,
    NECK_RANGE,
    THIGH_RANGE,
];

/// Draw a measurement set
///
/// Values are always drawn in centimeters. For imperial output every length
/// is then divided by [`CM_PER_INCH`], so imperial ranges are the metric ones
/// scaled rather than calibrated separately.
pub fn extract_measurements(rng: &dyn RandomSource, unit: MeasurementUnit) -> MeasurementSet {
    let draw = |(low, high): (f64, f64)| rng.draw_uniform(low, high);

    let metric = MeasurementSet {
        height: draw(HEIGHT_RANGE),
        shoulder_width: draw(SHOULDER_WIDTH_RANGE),
        chest_circumference: draw(CHEST_RANGE),
        waist_circumference: draw(WAIST_RANGE),
        hip_circumference: draw(HIP_RANGE),
        arm_length: draw(ARM_LENGTH_RANGE),
        inseam: draw(INSEAM_RANGE),
        neck_circumference: draw(NECK_RANGE),
        thigh_circumference: draw(THIGH_RANGE),
        confidence: MEASUREMENT_CONFIDENCE,
        unit,
    };

    match unit {
        MeasurementUnit::Metric => metric,
        MeasurementUnit::Imperial => metric.map_lengths(|cm| cm / CM_PER_INCH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{FixedRandom, ThreadRandom};

    #[test]
    fn test_metric_within_ranges() {
        for _ in 0..100 {
            let set = extract_measurements(&ThreadRandom, MeasurementUnit::Metric);
            for (value, (low, high)) in set.lengths().iter().zip(METRIC_RANGES) {
                assert!(*value >= low && *value <= high, "{} not in [{}, {}]", value, low, high);
            }
            assert_eq!(set.unit, MeasurementUnit::Metric);
            assert_eq!(set.confidence, MEASUREMENT_CONFIDENCE);
        }
    }

    #[test]
    fn test_imperial_is_scaled_metric() {
        let rng = FixedRandom::new(0.25);
        let metric = extract_measurements(&rng, MeasurementUnit::Metric);
        let imperial = extract_measurements(&rng, MeasurementUnit::Imperial);

        assert_eq!(imperial.unit, MeasurementUnit::Imperial);
        assert_eq!(imperial.confidence, MEASUREMENT_CONFIDENCE);
        for (cm, inches) in metric.lengths().iter().zip(imperial.lengths()) {
            assert!((cm / CM_PER_INCH - inches).abs() < 1e-9);
            assert!((cm - inches).abs() > 1.0);
        }
    }

    #[test]
    fn test_imperial_within_scaled_ranges() {
        let set = extract_measurements(&ThreadRandom, MeasurementUnit::Imperial);
        for (value, (low, high)) in set.lengths().iter().zip(METRIC_RANGES) {
            assert!(*value >= low / CM_PER_INCH && *value <= high / CM_PER_INCH);
        }
    }
}
