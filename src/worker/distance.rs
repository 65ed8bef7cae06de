//! Great-circle distance via the haversine formula.

use crate::geocode::Coordinates;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two points on the sphere.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `c = 2·atan2(√a, √(1−a))`, `d = R·c`.
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lon1 = from.lng.to_radians();
    let lat2 = to.lat.to_radians();
    let lon2 = to.lng.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = Coordinates { lat: 40.7128, lng: -74.0060 };
        assert_eq!(haversine_km(&point, &point), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates { lat: 52.52, lng: 13.405 };
        let b = Coordinates { lat: 48.8566, lng: 2.3522 };

        let there = haversine_km(&a, &b);
        let back = haversine_km(&b, &a);

        assert!((there - back).abs() < 1e-9);
        assert!(there > 0.0);
    }

    #[test]
    fn test_quarter_circumference_along_the_equator() {
        let origin = Coordinates { lat: 0.0, lng: 0.0 };
        let quarter = Coordinates { lat: 0.0, lng: 90.0 };

        let distance = haversine_km(&origin, &quarter);

        // R * pi / 2
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!(
            (distance - expected).abs() < 1e-6,
            "Expected {} km, got {} km",
            expected,
            distance
        );
        assert!((distance - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_known_city_pair_is_plausible() {
        // Berlin to Paris is roughly 878 km great-circle
        let berlin = Coordinates { lat: 52.52, lng: 13.405 };
        let paris = Coordinates { lat: 48.8566, lng: 2.3522 };

        let distance = haversine_km(&berlin, &paris);
        assert!((distance - 878.0).abs() < 5.0, "Got {} km", distance);
    }
}
