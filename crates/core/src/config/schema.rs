//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,

    #[serde(default)]
    pub nearby: NearbyConfig,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Application name shown in headers
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Default log level (overridden by RUST_LOG)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "ChapaShop".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Geolocation request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Request a high-accuracy fix
    #[serde(default = "default_true")]
    pub high_accuracy: bool,

    /// Provider timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Oldest acceptable cached position in seconds
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,

    /// Fixed position used when no platform provider exists
    #[serde(default)]
    pub home_lat: Option<f64>,

    #[serde(default)]
    pub home_lng: Option<f64>,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_secs: default_timeout_secs(),
            max_age_secs: default_max_age_secs(),
            home_lat: None,
            home_lng: None,
        }
    }
}

impl GeolocationConfig {
    /// Request options for the position provider.
    pub fn position_options(&self) -> chapashop_geo::PositionOptions {
        chapashop_geo::PositionOptions {
            enable_high_accuracy: self.high_accuracy,
            timeout: std::time::Duration::from_secs(self.timeout_secs),
            maximum_age: std::time::Duration::from_secs(self.max_age_secs),
        }
    }

    /// Configured home position, when both halves are set.
    pub fn home(&self) -> Option<chapashop_geo::Coordinate> {
        Some(chapashop_geo::Coordinate::new(self.home_lat?, self.home_lng?))
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_age_secs() -> u64 {
    300
}

/// Nearby search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyConfig {
    /// Default search radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Default maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            limit: default_limit(),
        }
    }
}

fn default_radius_km() -> f64 {
    5.0
}

fn default_limit() -> usize {
    20
}
