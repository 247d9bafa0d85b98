//! Display-oriented distance helpers.

use crate::{haversine_distance, Coordinate};

/// Distance in kilometers rounded to two decimals.
///
/// Returns `None` when any input is `0.0` or NaN. A literal zero coordinate
/// (equator or prime meridian) is therefore treated as "no distance
/// available"; callers relying on such points should use
/// [`haversine_distance`] directly.
///
/// ```
/// use chapashop_geo::calculate_distance;
///
/// let d = calculate_distance(19.4326, -99.1332, 19.4326, -99.1332);
/// assert_eq!(d, Some(0.0));
/// assert_eq!(calculate_distance(0.0, 10.0, 5.0, 5.0), None);
/// ```
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Option<f64> {
    if [lat1, lng1, lat2, lng2].iter().any(|v| is_falsy(*v)) {
        return None;
    }

    let km = haversine_distance(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2));
    Some(round_to_hundredths(km))
}

/// Formats a distance for display: `"500m"` below one kilometer, `"2.5km"`
/// otherwise, empty when unknown.
pub fn format_distance(distance_km: Option<f64>) -> String {
    match distance_km {
        None => String::new(),
        Some(km) if km.is_nan() => String::new(),
        Some(km) if km < 1.0 => format!("{}m", (km * 1000.0).round() as i64),
        Some(km) => format!("{km}km"),
    }
}

#[inline]
fn is_falsy(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

#[inline]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inputs_rejected() {
        assert_eq!(calculate_distance(0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(calculate_distance(19.4, -99.1, 0.0, -99.1), None);
        assert_eq!(calculate_distance(19.4, f64::NAN, 19.4, -99.1), None);
    }

    #[test]
    fn test_reflexive() {
        assert_eq!(calculate_distance(19.4, -99.1, 19.4, -99.1), Some(0.0));
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let d = calculate_distance(19.4326, -99.1332, 19.4270, -99.1677).unwrap();
        assert_eq!(d, (d * 100.0).round() / 100.0);
        assert!(d > 3.0 && d < 4.0, "{}", d);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(Some(0.5)), "500m");
        assert_eq!(format_distance(Some(0.0)), "0m");
        assert_eq!(format_distance(Some(0.123)), "123m");
        assert_eq!(format_distance(Some(1.0)), "1km");
        assert_eq!(format_distance(Some(3.27)), "3.27km");
        assert_eq!(format_distance(None), "");
        assert_eq!(format_distance(Some(f64::NAN)), "");
    }
}
