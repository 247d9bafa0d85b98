//! Ranking businesses by distance from the user.
//!
//! Distances go through [`calculate_distance`], so they carry the same
//! two-decimal rounding and zero-coordinate rejection as single lookups.

use crate::{calculate_distance, format_distance, GeoPoint, LocationInfo};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A business and its location.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessLocation {
    pub id: String,
    #[serde(flatten)]
    pub location: LocationInfo,
}

/// Distance from the user to one business.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    pub id: String,
    /// `None` when either side has no usable coordinates.
    pub distance_km: Option<f64>,
    /// Display label, empty when the distance is unknown.
    pub label: String,
}

/// Distances from `user` to every business, in input order.
///
/// ```
/// use chapashop_geo::{nearby::{distances_from, BusinessLocation}, GeoPoint, LocationInfo};
///
/// let shops = vec![BusinessLocation {
///     id: "tacos".into(),
///     location: LocationInfo::from_point(GeoPoint::new(19.4270, -99.1677)),
/// }];
///
/// let results = distances_from(GeoPoint::new(19.4326, -99.1332), &shops);
/// assert_eq!(results.len(), 1);
/// assert!(results[0].label.ends_with("km"));
/// ```
pub fn distances_from(user: GeoPoint, businesses: &[BusinessLocation]) -> Vec<DistanceResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        businesses
            .par_iter()
            .map(|business| distance_to(&user, business))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        businesses
            .iter()
            .map(|business| distance_to(&user, business))
            .collect()
    }
}

/// Distances sorted closest first. Unknown distances go last.
pub fn rank_by_distance(
    user: GeoPoint,
    businesses: &[BusinessLocation],
    max_results: Option<usize>,
) -> Vec<DistanceResult> {
    let mut results = distances_from(user, businesses);
    results.sort_by(compare_distance);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Businesses within `radius_km`, closest first. Unknown distances are
/// excluded.
pub fn within_radius(
    user: GeoPoint,
    businesses: &[BusinessLocation],
    radius_km: f64,
) -> Vec<DistanceResult> {
    let mut results = distances_from(user, businesses);
    results.retain(|r| r.distance_km.is_some_and(|d| d <= radius_km));
    results.sort_by(compare_distance);
    results
}

fn compare_distance(a: &DistanceResult, b: &DistanceResult) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[inline]
fn distance_to(user: &GeoPoint, business: &BusinessLocation) -> DistanceResult {
    let distance_km = match (user.coordinate(), business.location.point().coordinate()) {
        (Some(from), Some(to)) => {
            calculate_distance(from.latitude, from.longitude, to.latitude, to.longitude)
        }
        _ => None,
    };

    DistanceResult {
        id: business.id.clone(),
        distance_km,
        label: format_distance(distance_km),
    }
}
