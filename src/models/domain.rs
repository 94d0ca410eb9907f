use serde::{Deserialize, Serialize};
use validator::Validate;

/// Photo submitted by the avatar pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhotoRef {
    #[validate(length(min = 1))]
    pub url: String,
    #[validate(length(min = 1))]
    #[serde(rename = "type")]
    pub photo_type: String,
}

/// Photo after background removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedPhoto {
    pub url: String,
    #[serde(rename = "type")]
    pub photo_type: String,
    #[serde(rename = "maskQuality")]
    pub mask_quality: f64,
}

/// The 33 body keypoints, in detector output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkName {
    Nose,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl LandmarkName {
    pub const COUNT: usize = 33;

    pub const ALL: [LandmarkName; 33] = [
        LandmarkName::Nose,
        LandmarkName::LeftEyeInner,
        LandmarkName::LeftEye,
        LandmarkName::LeftEyeOuter,
        LandmarkName::RightEyeInner,
        LandmarkName::RightEye,
        LandmarkName::RightEyeOuter,
        LandmarkName::LeftEar,
        LandmarkName::RightEar,
        LandmarkName::MouthLeft,
        LandmarkName::MouthRight,
        LandmarkName::LeftShoulder,
        LandmarkName::RightShoulder,
        LandmarkName::LeftElbow,
        LandmarkName::RightElbow,
        LandmarkName::LeftWrist,
        LandmarkName::RightWrist,
        LandmarkName::LeftPinky,
        LandmarkName::RightPinky,
        LandmarkName::LeftIndex,
        LandmarkName::RightIndex,
        LandmarkName::LeftThumb,
        LandmarkName::RightThumb,
        LandmarkName::LeftHip,
        LandmarkName::RightHip,
        LandmarkName::LeftKnee,
        LandmarkName::RightKnee,
        LandmarkName::LeftAnkle,
        LandmarkName::RightAnkle,
        LandmarkName::LeftHeel,
        LandmarkName::RightHeel,
        LandmarkName::LeftFootIndex,
        LandmarkName::RightFootIndex,
    ];
}

/// Single body keypoint in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub confidence: f64,
    pub name: LandmarkName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    pub points: Vec<LandmarkPoint>,
    #[serde(rename = "averageConfidence")]
    pub average_confidence: f64,
}

/// Parsed through a string so null, numbers and unknown names all surface
/// as data errors rather than JSON syntax errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MeasurementUnit {
    #[default]
    Metric,
    Imperial,
}

impl std::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementUnit::Metric => write!(f, "metric"),
            MeasurementUnit::Imperial => write!(f, "imperial"),
        }
    }
}

impl TryFrom<String> for MeasurementUnit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "metric" => Ok(MeasurementUnit::Metric),
            "imperial" => Ok(MeasurementUnit::Imperial),
            other => Err(format!("unknown unit `{}`, expected `metric` or `imperial`", other)),
        }
    }
}

/// Body measurements, lengths in centimeters or inches depending on `unit`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSet {
    pub height: f64,
    pub shoulder_width: f64,
    pub chest_circumference: f64,
    pub waist_circumference: f64,
    pub hip_circumference: f64,
    pub arm_length: f64,
    pub inseam: f64,
    pub neck_circumference: f64,
    pub thigh_circumference: f64,
    pub confidence: f64,
    pub unit: MeasurementUnit,
}

impl MeasurementSet {
    /// The nine length fields, in wire order
    pub fn lengths(&self) -> [f64; 9] {
        [
            self.height,
            self.shoulder_width,
            self.chest_circumference,
            self.waist_circumference,
            self.hip_circumference,
            self.arm_length,
            self.inseam,
            self.neck_circumference,
            self.thigh_circumference,
        ]
    }

    /// Apply `f` to every length field, leaving confidence and unit alone
    pub fn map_lengths(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            height: f(self.height),
            shoulder_width: f(self.shoulder_width),
            chest_circumference: f(self.chest_circumference),
            waist_circumference: f(self.waist_circumference),
            hip_circumference: f(self.hip_circumference),
            arm_length: f(self.arm_length),
            inseam: f(self.inseam),
            neck_circumference: f(self.neck_circumference),
            thigh_circumference: f(self.thigh_circumference),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Hourglass,
    InvertedTriangle,
    Rectangle,
    Pear,
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BodyType::Hourglass => "hourglass",
            BodyType::InvertedTriangle => "inverted-triangle",
            BodyType::Rectangle => "rectangle",
            BodyType::Pear => "pear",
        };
        f.write_str(label)
    }
}
