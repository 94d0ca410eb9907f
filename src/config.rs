use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::ClassificationThresholds;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub classification: ClassificationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self { name: default_service_name() }
    }
}

fn default_service_name() -> String { "ML Avatar Service".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Ratio thresholds and fallback measurements for body-type classification
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationSettings {
    #[serde(default = "default_hourglass_waist_hip_max")]
    pub hourglass_waist_hip_max: f64,
    #[serde(default = "default_inverted_triangle_shoulder_hip_min")]
    pub inverted_triangle_shoulder_hip_min: f64,
    #[serde(default = "default_rectangle_waist_hip_min")]
    pub rectangle_waist_hip_min: f64,
    #[serde(default = "default_waist")]
    pub default_waist: f64,
    #[serde(default = "default_hip")]
    pub default_hip: f64,
    #[serde(default = "default_shoulder")]
    pub default_shoulder: f64,
}

impl Default for ClassificationSettings {
    fn default() -> Self {
        Self {
            hourglass_waist_hip_max: default_hourglass_waist_hip_max(),
            inverted_triangle_shoulder_hip_min: default_inverted_triangle_shoulder_hip_min(),
            rectangle_waist_hip_min: default_rectangle_waist_hip_min(),
            default_waist: default_waist(),
            default_hip: default_hip(),
            default_shoulder: default_shoulder(),
        }
    }
}

fn default_hourglass_waist_hip_max() -> f64 { 0.75 }
fn default_inverted_triangle_shoulder_hip_min() -> f64 { 0.5 }
fn default_rectangle_waist_hip_min() -> f64 { 0.85 }
fn default_waist() -> f64 { 80.0 }
fn default_hip() -> f64 { 100.0 }
fn default_shoulder() -> f64 { 45.0 }

impl From<&ClassificationSettings> for ClassificationThresholds {
    fn from(settings: &ClassificationSettings) -> Self {
        Self {
            hourglass_waist_hip_max: settings.hourglass_waist_hip_max,
            inverted_triangle_shoulder_hip_min: settings.inverted_triangle_shoulder_hip_min,
            rectangle_waist_hip_min: settings.rectangle_waist_hip_min,
            default_waist: settings.default_waist,
            default_hip: settings.default_hip,
            default_shoulder: settings.default_shoulder,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AVATAR_ML__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AVATAR_ML__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("AVATAR_ML")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
