// Stub model exports
pub mod background;
pub mod classifier;
pub mod measurements;
pub mod pose;
pub mod random;

pub use background::{masked_url, remove_backgrounds, MASK_QUALITY};
pub use classifier::{BodyTypeClassifier, Classification, ClassificationThresholds, CLASSIFICATION_CONFIDENCE};
pub use measurements::{extract_measurements, CM_PER_INCH, MEASUREMENT_CONFIDENCE, METRIC_RANGES};
pub use pose::{detect_pose, landmark_y, AVERAGE_CONFIDENCE};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
