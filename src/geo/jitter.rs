//! Coordinate jittering.
//!
//! The privacy control at the center of the service: a submitted coordinate
//! is replaced by decoy points sampled uniformly over the disk of a bounded
//! radius around it, so the exact location is never persisted or exposed.

use rand::Rng;
use thiserror::Error;

use crate::config::MAX_JITTER_RADIUS_METERS;
use crate::geo::distance::destination;
use crate::geo::types::Coordinate;

/// Invalid jitter preconditions.
///
/// These are argument errors, not runtime failures: with a positive in-range
/// radius and a count of at least one, jittering cannot fail.
#[derive(Error, Debug, PartialEq)]
pub enum JitterError {
    /// Radius was zero or negative.
    #[error("jitter radius must be positive, got {0} m")]
    NonPositiveRadius(f64),

    /// Radius exceeded the supported maximum.
    #[error("jitter radius {0} m exceeds the maximum of {MAX_JITTER_RADIUS_METERS} m")]
    RadiusTooLarge(f64),

    /// Requested fewer than one decoy.
    #[error("decoy count must be at least 1, got {0}")]
    ZeroCount(usize),
}

/// Validates jitter parameters without sampling.
///
/// Lets callers that hold the parameters in long-lived configuration reject
/// bad values once, up front.
pub fn validate_jitter_params(radius_meters: f64, count: usize) -> Result<(), JitterError> {
    if !(radius_meters > 0.0) {
        return Err(JitterError::NonPositiveRadius(radius_meters));
    }
    if radius_meters > MAX_JITTER_RADIUS_METERS {
        return Err(JitterError::RadiusTooLarge(radius_meters));
    }
    if count < 1 {
        return Err(JitterError::ZeroCount(count));
    }
    Ok(())
}

/// Samples `count` decoy coordinates uniformly over the disk of
/// `radius_meters` around `center`, measured along the earth's surface.
///
/// Uniform over disk *area*: the radial distance is sampled as
/// `R * sqrt(u)` with `u` uniform in [0, 1). Sampling the radius uniformly
/// instead would pile points toward the center, because the annulus at small
/// radii holds less area than the one at large radii. The bearing is uniform
/// in [0, 2π), and the polar offset is projected onto the sphere from
/// `center`, so the bound holds at any latitude.
///
/// Each returned point is an independent sample; points are not required to
/// be mutually distinct (and in practice almost surely are).
pub fn jitter<R: Rng + ?Sized>(
    center: Coordinate,
    radius_meters: f64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Coordinate>, JitterError> {
    validate_jitter_params(radius_meters, count)?;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let u: f64 = rng.random();
        let distance = radius_meters * u.sqrt();
        let bearing = rng.random::<f64>() * std::f64::consts::TAU;
        points.push(destination(center, distance, bearing));
    }
    Ok(points)
}
