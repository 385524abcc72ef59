//! Geohash encoding at the service's fixed precision.
//!
//! Thin wrapper over the `geohash` crate. The precision is pinned to 10
//! characters; see [`crate::config::GEOHASH_PRECISION`]. Callers must only
//! pass jittered coordinates here. Encoding the submitted coordinate and
//! jittering afterward for display would defeat the anonymization entirely,
//! which is why the creation pipeline encodes strictly after [`super::jitter`].

use thiserror::Error;

use crate::config::GEOHASH_PRECISION;
use crate::geo::types::{Coordinate, GeoPoint};

/// A coordinate the geohash library refused to encode.
///
/// Only reachable with out-of-range components, which validation filters out
/// earlier; reaching this in the pipeline is an internal-class defect.
#[derive(Error, Debug)]
#[error("geohash encoding failed: {0}")]
pub struct GeohashEncodeError(#[from] ::geohash::GeohashError);

/// Encodes a jittered coordinate into its persisted [`GeoPoint`] form.
pub fn encode_geopoint(coord: Coordinate) -> Result<GeoPoint, GeohashEncodeError> {
    let geohash = encode(coord)?;
    Ok(GeoPoint {
        geopoint: coord,
        geohash,
    })
}

/// Encodes a coordinate as a geohash string at the fixed precision.
///
/// Deterministic: the same coordinate always yields the same string.
pub fn encode(coord: Coordinate) -> Result<String, GeohashEncodeError> {
    let hash = ::geohash::encode(
        ::geohash::Coord {
            x: coord.lon,
            y: coord.lat,
        },
        GEOHASH_PRECISION,
    )?;
    Ok(hash)
}
