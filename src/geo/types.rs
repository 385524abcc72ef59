//! Geographic coordinate types.

use serde::{Deserialize, Serialize};

/// A WGS84 geographic coordinate in degrees.
///
/// Used both for the submitted true coordinate (which only ever lives in
/// memory during request handling) and for the jittered decoys derived from
/// it. Nothing in the type distinguishes the two; the pipeline guarantees
/// only decoys reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checking.
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A decoy coordinate paired with its proximity-indexable geohash.
///
/// One `GeoPoint` is persisted per jittered coordinate. The geohash is always
/// computed from the jittered point, never the submitted one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    /// The jittered coordinate.
    pub geopoint: Coordinate,
    /// Fixed-precision geohash of `geopoint`.
    pub geohash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_accepts_normal_coordinates() {
        assert!(Coordinate::new(33.749, -84.388).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(Coordinate::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(-90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 180.1).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn test_is_valid_rejects_non_finite() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
        assert!(!Coordinate::new(f64::NEG_INFINITY, 0.0).is_valid());
    }

    #[test]
    fn test_deserialize_accepts_lng_alias() {
        let coord: Coordinate = serde_json::from_str(r#"{"lat": 33.749, "lng": -84.388}"#)
            .expect("lng alias should deserialize");
        assert_eq!(coord.lat, 33.749);
        assert_eq!(coord.lon, -84.388);
    }
}
