//! Location and distance commands

use super::{print_json, read_json};
use crate::OutputFormat;
use chapashop_core::config::Config;
use chapashop_core::{Error, ErrorCode, Result, ResultExt};
use chapashop_geo::nearby::{within_radius, BusinessLocation};
use chapashop_geo::{
    calculate_distance, format_distance, format_location, get_current_location, GeoPoint,
    Geolocation, LocationInfo, StaticProvider,
};
use chapashop_telemetry::Timer;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

/// Arguments of the `nearby` command
#[derive(Debug, Clone, Copy)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub limit: Option<usize>,
}

/// Print display text and map link for one business
pub fn show(file: &Path, format: OutputFormat) -> Result<()> {
    let info = LocationInfo::from_value(&read_json(file)?);
    let formatted = format_location(&info);

    match format {
        OutputFormat::Json => print_json(&formatted),
        OutputFormat::Text => {
            let label = if formatted.has_location {
                formatted.display_text.bold().to_string()
            } else {
                formatted.display_text.yellow().to_string()
            };
            println!("{}", label);
            println!("  {}", formatted.maps_link.cyan());
            Ok(())
        }
    }
}

/// Print the rounded distance between two points
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64, format: OutputFormat) -> Result<()> {
    let km = calculate_distance(lat1, lng1, lat2, lng2);
    let label = format_distance(km);

    match format {
        OutputFormat::Json => print_json(&json!({ "distanceKm": km, "label": label })),
        OutputFormat::Text => {
            if km.is_none() {
                println!("{}", "Distancia no disponible".yellow());
            } else {
                println!("{}", label.bold());
            }
            Ok(())
        }
    }
}

/// Resolve the user's position: explicit flags first, then the configured
/// home position through the geolocation capability.
async fn user_position(query: &NearbyQuery, config: &Config) -> Result<GeoPoint> {
    if let (Some(lat), Some(lng)) = (query.lat, query.lng) {
        return Ok(GeoPoint::new(lat, lng));
    }

    let geo = &config.schema.geolocation;
    let geolocation = Geolocation::from_option(geo.home().map(StaticProvider))
        .with_options(geo.position_options());

    get_current_location(&geolocation)
        .await
        .map_err(Error::from)
        .context("Resolving user position for nearby search")
}

/// Print businesses within the search radius, nearest first.
///
/// `--radius` and `--limit` fall back to the `[nearby]` config section.
pub async fn nearby(
    file: &Path,
    query: NearbyQuery,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let businesses: Vec<BusinessLocation> =
        serde_json::from_value(read_json(file)?).map_err(|e| {
            Error::new(
                ErrorCode::InvalidInput,
                format!("Expected an array of businesses: {}", e),
            )
        })?;
    let user = user_position(&query, config).await?;

    let timer = Timer::start("nearby_rank");
    let radius = query.radius.unwrap_or(config.schema.nearby.radius_km);
    let limit = query.limit.unwrap_or(config.schema.nearby.limit);
    let mut results = within_radius(user, &businesses, radius);
    results.truncate(limit);
    timer.stop();

    tracing::debug!(
        total = businesses.len(),
        shown = results.len(),
        radius,
        "Nearby ranking done"
    );

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("{}", "Sin resultados".yellow());
            }
            for result in &results {
                let label = if result.label.is_empty() { "?" } else { result.label.as_str() };
                println!("  {:<10} {}", label.green(), result.id);
            }
            Ok(())
        }
    }
}
