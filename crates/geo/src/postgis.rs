//! PostGIS point parsing for Supabase location columns.
//!
//! Supabase returns `geography(Point)` columns either as GeoJSON or as
//! (E)WKT text:
//! - `{"type": "Point", "coordinates": [lng, lat]}`
//! - `POINT(lng lat)`
//! - `SRID=4326;POINT(lng lat)`

use crate::{Coordinate, GeoError, Result};
use serde_json::Value;

/// Parse a PostGIS point from a JSON value.
///
/// Returns `None` for null, unparseable or out-of-range values.
///
/// ```
/// use chapashop_geo::parse_postgis_point;
/// use serde_json::json;
///
/// let geojson = json!({"type": "Point", "coordinates": [-99.1332, 19.4326]});
/// let coord = parse_postgis_point(&geojson).unwrap();
/// assert!((coord.latitude - 19.4326).abs() < 0.0001);
///
/// let ewkt = json!("SRID=4326;POINT(-99.1332 19.4326)");
/// assert!(parse_postgis_point(&ewkt).is_some());
/// ```
pub fn parse_postgis_point(value: &Value) -> Option<Coordinate> {
    match value {
        Value::Object(map) => {
            let coords = map.get("coordinates")?.as_array()?;
            let [lng, lat, ..] = coords.as_slice() else {
                return None;
            };
            let coord = Coordinate::new(lat.as_f64()?, lng.as_f64()?);
            if !coord.is_valid() {
                tracing::trace!(?coord, "Discarding out-of-range GeoJSON point");
                return None;
            }
            Some(coord)
        }
        Value::String(wkt) => match parse_wkt_point(wkt) {
            Ok(coord) => Some(coord),
            Err(err) => {
                tracing::trace!(%err, "Discarding unparseable location");
                None
            }
        },
        _ => None,
    }
}

/// Parse a WKT or EWKT point. Format: `[SRID=n;]POINT(longitude latitude)`.
pub fn parse_wkt_point(wkt: &str) -> Result<Coordinate> {
    let wkt = wkt.trim();
    let body = match wkt.split_once(';') {
        Some((srid, rest)) if srid.starts_with("SRID=") => rest.trim(),
        _ => wkt,
    };

    let inner = body
        .strip_prefix("POINT")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| GeoError::InvalidWkt(format!("Expected POINT(lng lat), got: {wkt}")))?;

    let parts: Vec<&str> = inner.split_whitespace().collect();
    let [lng, lat] = parts.as_slice() else {
        return Err(GeoError::InvalidWkt(format!(
            "Expected 2 coordinates, got {}",
            parts.len()
        )));
    };

    let lng: f64 = lng
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid longitude: {lng}")))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid latitude: {lat}")))?;

    let coord = Coordinate::new(lat, lng);
    if !coord.is_valid() {
        return Err(GeoError::InvalidCoordinate(format!("{lat},{lng} is out of range")));
    }
    Ok(coord)
}
