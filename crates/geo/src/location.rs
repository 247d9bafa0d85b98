//! Map links and display text for business locations.

use crate::{parse_postgis_point, Coordinate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Google Maps search endpoint; the query value is appended.
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Used when nothing about the location is known.
pub const MAPS_HOME_URL: &str = "https://www.google.com/maps";

/// Shown when only coordinates are known.
pub const VIEW_ON_MAP_LABEL: &str = "Ver en el mapa";

/// Shown when nothing about the location is known.
pub const UNAVAILABLE_LABEL: &str = "Ubicación no disponible";

/// Characters left unescaped by the browser's `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A latitude/longitude pair where either half may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// The coordinate, when both halves are present and not NaN.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if !lat.is_nan() && !lng.is_nan() => {
                Some(Coordinate::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.coordinate().is_some()
    }
}

impl From<Coordinate> for GeoPoint {
    fn from(coord: Coordinate) -> Self {
        GeoPoint::new(coord.latitude, coord.longitude)
    }
}

/// Location fields of a business record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationInfo {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub name: Option<String>,
}

impl LocationInfo {
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds location info from a raw business record.
    ///
    /// Only JSON numbers count as coordinates. When `lat`/`lng` are both
    /// absent, a PostGIS `location` column is used instead.
    pub fn from_value(value: &Value) -> Self {
        let number = |key: &str| value.get(key).and_then(Value::as_f64);
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);

        let (mut lat, mut lng) = (number("lat"), number("lng"));
        if lat.is_none() && lng.is_none() {
            if let Some(coord) = value.get("location").and_then(parse_postgis_point) {
                lat = Some(coord.latitude);
                lng = Some(coord.longitude);
            }
        }

        Self {
            lat,
            lng,
            address: text("address"),
            name: text("name"),
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }

    fn trimmed_address(&self) -> Option<&str> {
        trimmed(&self.address)
    }

    fn trimmed_name(&self) -> Option<&str> {
        trimmed(&self.name)
    }
}

impl<'de> Deserialize<'de> for LocationInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(LocationInfo::from_value(&value))
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Display model for a business location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedLocation {
    pub display_text: String,
    pub maps_link: String,
    pub has_location: bool,
    pub has_coordinates: bool,
    pub has_address: bool,
}

/// Builds a Google Maps link.
///
/// Coordinates win over address, address over name; with none of them the
/// maps home page is returned. Coordinates are written in plain decimal
/// (`0.0000001`), never in exponent form.
///
/// ```
/// use chapashop_geo::{generate_maps_link, GeoPoint, LocationInfo};
///
/// let info = LocationInfo::from_point(GeoPoint::new(19.4, -99.1));
/// assert_eq!(
///     generate_maps_link(&info),
///     "https://www.google.com/maps/search/?api=1&query=19.4,-99.1"
/// );
/// ```
pub fn generate_maps_link(info: &LocationInfo) -> String {
    if let Some(coord) = info.point().coordinate() {
        return format!("{MAPS_SEARCH_URL}{},{}", coord.latitude, coord.longitude);
    }

    match info.trimmed_address().or_else(|| info.trimmed_name()) {
        Some(query) => format!("{MAPS_SEARCH_URL}{}", utf8_percent_encode(query, QUERY_VALUE)),
        None => MAPS_HOME_URL.to_string(),
    }
}

/// Builds the display model for a location. The map link is always
/// computed, even when no location is known.
pub fn format_location(info: &LocationInfo) -> FormattedLocation {
    let has_coordinates = info.point().is_valid();
    let address = info.trimmed_address();
    let has_address = address.is_some();

    let display_text = match (address, has_coordinates, info.trimmed_name()) {
        (Some(address), _, _) => address.to_string(),
        (None, true, _) => VIEW_ON_MAP_LABEL.to_string(),
        (None, false, Some(name)) => format!("Buscar \"{name}\" en el mapa"),
        (None, false, None) => UNAVAILABLE_LABEL.to_string(),
    };

    FormattedLocation {
        display_text,
        maps_link: generate_maps_link(info),
        has_location: has_coordinates || has_address,
        has_coordinates,
        has_address,
    }
}
