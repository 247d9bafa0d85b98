//! WASM bindings for the geo crate.
//!
//! Exposes the location helpers to the browser front end. Structured values
//! cross the boundary as JSON strings.

use crate::nearby::{self, BusinessLocation};
use crate::{
    calculate_distance, format_distance, format_location, generate_maps_link, GeoPoint,
    LocationInfo,
};
use wasm_bindgen::prelude::*;

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Rounded distance in kilometers, or `undefined` when unavailable.
#[wasm_bindgen(js_name = calculateDistance)]
pub fn calculate_distance_js(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Option<f64> {
    calculate_distance(lat1, lng1, lat2, lng2)
}

/// Distance label such as `"500m"` or `"2.5km"`.
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance_js(distance_km: Option<f64>) -> String {
    format_distance(distance_km)
}

/// Google Maps link for a JSON location record.
#[wasm_bindgen(js_name = generateMapsLink)]
pub fn generate_maps_link_js(location_json: &str) -> Result<String, JsValue> {
    let info: LocationInfo = parse_json(location_json)?;
    Ok(generate_maps_link(&info))
}

/// Display model for a JSON location record, as JSON.
#[wasm_bindgen(js_name = formatLocation)]
pub fn format_location_js(location_json: &str) -> Result<String, JsValue> {
    let info: LocationInfo = parse_json(location_json)?;
    to_json(&format_location(&info))
}

/// Businesses ranked by distance from the user, as JSON.
///
/// `max_results` of 0 returns every business.
#[wasm_bindgen(js_name = rankByDistance)]
pub fn rank_by_distance_js(
    user_lat: f64,
    user_lng: f64,
    businesses_json: &str,
    max_results: u32,
) -> Result<String, JsValue> {
    let businesses: Vec<BusinessLocation> = parse_json(businesses_json)?;
    let max = if max_results == 0 { None } else { Some(max_results as usize) };
    to_json(&nearby::rank_by_distance(GeoPoint::new(user_lat, user_lng), &businesses, max))
}

/// Businesses within a radius, closest first, as JSON.
#[wasm_bindgen(js_name = withinRadius)]
pub fn within_radius_js(
    user_lat: f64,
    user_lng: f64,
    businesses_json: &str,
    radius_km: f64,
) -> Result<String, JsValue> {
    let businesses: Vec<BusinessLocation> = parse_json(businesses_json)?;
    to_json(&nearby::within_radius(GeoPoint::new(user_lat, user_lng), &businesses, radius_km))
}
