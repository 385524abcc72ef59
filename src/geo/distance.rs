//! Great-circle geometry on the WGS84 mean sphere.
//!
//! Distances here are measured along the earth's surface, not on a flat-plane
//! approximation. A planar offset of `x` meters east shrinks in real ground
//! distance as latitude grows, which would bias jittered points at
//! non-equatorial latitudes; spherical math avoids that.

use crate::geo::types::Coordinate;

/// Mean earth radius in meters (IUGG mean radius, the value common geospatial
/// libraries use for spherical approximations).
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Great-circle distance between two coordinates in meters (haversine).
pub fn great_circle_distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Destination point a given distance and bearing from an origin.
///
/// Standard great-circle destination formula: the origin is moved
/// `distance_meters` along the initial bearing (radians, clockwise from
/// north). Longitude is normalized back into [-180, 180].
pub fn destination(origin: Coordinate, distance_meters: f64, bearing_radians: f64) -> Coordinate {
    let angular = distance_meters / EARTH_RADIUS_METERS;
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 =
        (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing_radians.cos()).asin();
    let lon2 = lon1
        + (bearing_radians.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        lat: lat2.to_degrees(),
        lon: normalize_longitude(lon2.to_degrees()),
    }
}

/// Wraps a longitude in degrees into [-180, 180].
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
