//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::{JourneyError, Result};

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees
///
/// Both components must be finite. No range validation is applied beyond
/// that; out-of-range values are carried through the generators unchanged.
/// Use [`GeoLocation::try_new`] for coordinates from outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Checked constructor rejecting NaN and infinite components
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(JourneyError::InvalidLocation(format!(
                "latitude {} and longitude {} must both be finite",
                latitude, longitude
            )));
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Haversine great-circle distance to `other` in kilometers
    pub fn distance_to(&self, other: &Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push `a` a hair past 1.0 for antipodal points
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
        EARTH_RADIUS_KM * c
    }

    /// Shift by a flat-plane delta in degrees
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.latitude + d_lat, self.longitude + d_lon)
    }
}

impl From<GeoLocation> for geo_types::Point<f64> {
    fn from(location: GeoLocation) -> Self {
        geo_types::Point::new(location.longitude, location.latitude)
    }
}

impl From<geo_types::Point<f64>> for GeoLocation {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let nairobi = GeoLocation::new(-1.2921, 36.8219);
        assert_eq!(nairobi.distance_to(&nairobi), 0.0);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(GeoLocation::try_new(-1.2921, 36.8219).is_ok());
        for (lat, lon) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, f64::NAN)] {
            let err = GeoLocation::try_new(lat, lon).unwrap_err();
            assert!(matches!(err, JourneyError::InvalidLocation(_)));
        }
        assert!(!GeoLocation::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let a = GeoLocation::new(0.0, 0.0);
        let b = GeoLocation::new(0.0, 1.0);
        let d = a.distance_to(&b);
        assert!((d - 111.19).abs() < 0.5, "got {} km", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let tokyo = GeoLocation::new(35.6762, 139.6503);
        let seattle = GeoLocation::new(47.6062, -122.3321);
        let there = tokyo.distance_to(&seattle);
        let back = seattle.distance_to(&tokyo);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 7000.0 && there < 8000.0);
    }

    #[test]
    fn test_antipodal_points() {
        let a = GeoLocation::new(0.0, 0.0);
        let b = GeoLocation::new(0.0, 180.0);
        let d = a.distance_to(&b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_matches_geo_haversine() {
        use geo::HaversineDistance;

        let a = GeoLocation::new(-3.4653, -62.2159);
        let b = GeoLocation::new(36.2048, 138.2529);
        let ours = a.distance_to(&b);

        let pa: geo_types::Point<f64> = a.into();
        let pb: geo_types::Point<f64> = b.into();
        let theirs_km = pa.haversine_distance(&pb) / 1000.0;

        // geo uses a slightly larger mean radius (6371.0088 km)
        assert!((ours - theirs_km).abs() / theirs_km < 1e-4);
    }

    #[test]
    fn test_point_round_trip_keeps_axis_order() {
        let home = GeoLocation::new(47.6, -122.3);
        let point: geo_types::Point<f64> = home.into();
        assert_eq!(point.x(), -122.3);
        assert_eq!(point.y(), 47.6);
        assert_eq!(GeoLocation::from(point), home);
    }
}
