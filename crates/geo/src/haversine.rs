//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in kilometers, unrounded.
///
/// ```
/// use chapashop_geo::{haversine_distance, Coordinate};
///
/// let cdmx = Coordinate::new(19.4326, -99.1332);
/// let guadalajara = Coordinate::new(20.6597, -103.3496);
///
/// let distance = haversine_distance(&cdmx, &guadalajara);
/// assert!((distance - 461.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CDMX: Coordinate = Coordinate { latitude: 19.4326, longitude: -99.1332 };
    const MONTERREY: Coordinate = Coordinate { latitude: 25.6866, longitude: -100.3161 };
    const OAXACA: Coordinate = Coordinate { latitude: 17.0732, longitude: -96.7266 };

    #[test]
    fn test_cdmx_to_monterrey() {
        let distance = haversine_distance(&CDMX, &MONTERREY);
        // Expected: ~706 km
        assert!((distance - 706.0).abs() < 10.0, "CDMX-Monterrey: {}", distance);
    }

    #[test]
    fn test_cdmx_to_oaxaca() {
        let distance = haversine_distance(&CDMX, &OAXACA);
        // Expected: ~364 km
        assert!((distance - 364.0).abs() < 10.0, "CDMX-Oaxaca: {}", distance);
    }

    #[test]
    fn test_origin_to_origin_is_zero() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(haversine_distance(&origin, &origin), 0.0);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&CDMX, &OAXACA);
        let meters = haversine_distance_meters(&CDMX, &OAXACA);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn prop_same_point_is_zero(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
            let point = Coordinate::new(lat, lng);
            prop_assert!(haversine_distance(&point, &point).abs() < 1e-9);
        }

        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lng1);
            let b = Coordinate::new(lat2, lng2);
            prop_assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-6);
        }
    }
}
