//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors from parsing location data.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Invalid WKT/EWKT format
    #[error("Invalid WKT format: {0}")]
    InvalidWkt(String),

    /// Coordinate outside the valid latitude/longitude range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors reported by a platform position provider.
///
/// Numeric codes match the browser `GeolocationPositionError` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("User denied the request for geolocation")]
    PermissionDenied,

    #[error("Location information is unavailable")]
    PositionUnavailable,

    #[error("The request to get user location timed out")]
    Timeout,
}

impl PositionError {
    /// Browser error code (1, 2 or 3).
    pub fn code(&self) -> u16 {
        match self {
            PositionError::PermissionDenied => 1,
            PositionError::PositionUnavailable => 2,
            PositionError::Timeout => 3,
        }
    }

    /// Maps a browser error code back to the error. Unknown codes map to
    /// `PositionUnavailable`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => PositionError::PermissionDenied,
            3 => PositionError::Timeout,
            _ => PositionError::PositionUnavailable,
        }
    }
}

/// Errors from [`get_current_location`](crate::get_current_location).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No position provider is available on this platform
    #[error("Geolocation is not supported on this platform")]
    Unsupported,

    /// The provider failed; forwarded unchanged
    #[error(transparent)]
    Provider(#[from] PositionError),
}

/// Error code for integration with chapashop-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    InvalidWkt = 10001,
    InvalidCoordinate = 10002,
    JsonParsing = 10003,
    GeolocationUnsupported = 10010,
    PermissionDenied = 10011,
    PositionUnavailable = 10012,
    Timeout = 10013,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidWkt(_) => GeoErrorCode::InvalidWkt,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}

impl LocationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            LocationError::Unsupported => GeoErrorCode::GeolocationUnsupported,
            LocationError::Provider(PositionError::PermissionDenied) => {
                GeoErrorCode::PermissionDenied
            }
            LocationError::Provider(PositionError::PositionUnavailable) => {
                GeoErrorCode::PositionUnavailable
            }
            LocationError::Provider(PositionError::Timeout) => GeoErrorCode::Timeout,
        }
    }
}
