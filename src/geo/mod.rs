//! Geospatial primitives: coordinates, great-circle math, jitter, geohash.
//!
//! Everything here is pure. The same [`jitter`] implementation backs both the
//! persistence pipeline and any preview collaborator, so the stored decoys and
//! the anonymization shown to users can never disagree.

pub mod distance;
pub mod geohash;
pub mod jitter;
mod types;

pub use distance::{great_circle_distance_meters, EARTH_RADIUS_METERS};
pub use geohash::{encode_geopoint, GeohashEncodeError};
pub use jitter::{jitter, validate_jitter_params, JitterError};
pub use types::{Coordinate, GeoPoint};
