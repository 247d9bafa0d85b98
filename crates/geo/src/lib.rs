//! Location and distance utilities for ChapaShop listings.
//!
//! This crate provides:
//! - Google Maps deep links and location display text
//! - Rounded haversine distances and distance labels
//! - PostGIS point parsing for Supabase location columns
//! - Nearby ranking with optional parallelism
//! - Current-position lookup through an injected provider
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use chapashop_geo::{
//!     calculate_distance, format_distance, format_location, GeoPoint, LocationInfo,
//! };
//!
//! let shop = LocationInfo::from_point(GeoPoint::new(19.4270, -99.1677))
//!     .with_address("Av. Álvaro Obregón 100");
//! assert_eq!(format_location(&shop).display_text, "Av. Álvaro Obregón 100");
//!
//! let km = calculate_distance(19.4326, -99.1332, 19.4270, -99.1677);
//! assert!(format_distance(km).ends_with("km"));
//! ```

mod distance;
mod error;
mod geolocation;
mod haversine;
mod location;
pub mod nearby;
mod postgis;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::{calculate_distance, format_distance};
pub use error::{GeoError, GeoErrorCode, LocationError, PositionError, Result};
pub use geolocation::{
    get_current_location, Geolocation, NoProvider, PositionOptions, PositionProvider,
    StaticProvider,
};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use location::{
    format_location, generate_maps_link, FormattedLocation, GeoPoint, LocationInfo, MAPS_HOME_URL,
    MAPS_SEARCH_URL, UNAVAILABLE_LABEL, VIEW_ON_MAP_LABEL,
};
pub use postgis::{parse_postgis_point, parse_wkt_point};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both values are within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
