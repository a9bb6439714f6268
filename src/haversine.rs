//! Haversine distance provider (offline fallback).
//!
//! Estimates trip mileage from great-circle distance and an assumed speed.
//! Less accurate than a road-network service (ignores roads) but needs no
//! network access.

use crate::limits::AVG_SPEED_MPH;
use crate::traits::{DistanceProvider, DistanceUnavailable, RouteEstimate};

const EARTH_RADIUS_KM: f64 = 6371.0;
const MILES_PER_KM: f64 = 0.621371;

/// Great-circle distance provider.
#[derive(Debug, Clone)]
pub struct HaversineDistance {
    /// Assumed average driving speed, used for the duration label.
    pub speed_mph: f64,
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self {
            speed_mph: AVG_SPEED_MPH,
        }
    }
}

impl HaversineDistance {
    pub fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }

    /// Great-circle distance between two (lat, lng) points in miles.
    fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c * MILES_PER_KM
    }
}

impl DistanceProvider for HaversineDistance {
    fn resolve(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Result<RouteEstimate, DistanceUnavailable> {
        let miles = Self::haversine_miles(from, to);
        let total_minutes = (miles / self.speed_mph * 60.0).round() as u64;

        Ok(RouteEstimate {
            miles,
            duration_label: format!("{}h {}m", total_minutes / 60, total_minutes % 60),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero_miles() {
        let miles = HaversineDistance::haversine_miles((36.1, -115.1), (36.1, -115.1));
        assert!(miles < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn known_distance_las_vegas_to_los_angeles() {
        // ~370 km great circle, ~230 miles.
        let miles = HaversineDistance::haversine_miles((36.17, -115.14), (34.05, -118.24));
        assert!(
            miles > 215.0 && miles < 250.0,
            "LV to LA should be ~230 miles, got {miles}"
        );
    }

    #[test]
    fn duration_label_uses_the_assumed_speed() {
        let provider = HaversineDistance::new(55.0);
        let estimate = provider.resolve((0.0, 0.0), (0.0, 0.0)).unwrap();
        assert_eq!(estimate.duration_label, "0h 0m");

        // 1 degree of longitude at the equator is ~69.1 miles, ~75 minutes
        // at 55 mph.
        let estimate = provider.resolve((0.0, 0.0), (0.0, 1.0)).unwrap();
        assert!(estimate.miles > 68.0 && estimate.miles < 70.0);
        assert_eq!(estimate.duration_label, "1h 15m");
    }
}
