//! Report creation orchestration.
//!
//! Runs one submission through validate → jitter → encode → map → persist and
//! returns the new report identifier. The service is stateless between
//! requests; concurrent submissions share nothing but the connection pool,
//! the catalog cache, and the stats counters.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info};
use rand::distr::Alphanumeric;
use rand::Rng;
use sqlx::SqlitePool;

use crate::config::REPORT_ID_LENGTH;
use crate::enums::CatalogCache;
use crate::error_handling::{ErrorType, ReportError, ServiceStats};
use crate::geo::{encode_geopoint, jitter, validate_jitter_params, GeoPoint, JitterError};
use crate::report::mapper::to_document;
use crate::report::payload::RawReportPayload;
use crate::report::validate::validate;
use crate::storage::insert_report;

/// Orchestrates report creation.
///
/// Jitter parameters are validated once at construction; a service instance
/// can therefore treat a jitter failure at request time as an internal
/// defect rather than a caller error.
pub struct ReportCreationService {
    pool: Arc<SqlitePool>,
    catalog_cache: Arc<CatalogCache>,
    stats: Arc<ServiceStats>,
    jitter_radius_meters: f64,
    decoy_count: usize,
}

impl ReportCreationService {
    /// Creates a service, rejecting invalid jitter parameters up front.
    pub fn new(
        pool: Arc<SqlitePool>,
        catalog_cache: Arc<CatalogCache>,
        stats: Arc<ServiceStats>,
        jitter_radius_meters: f64,
        decoy_count: usize,
    ) -> Result<Self, JitterError> {
        validate_jitter_params(jitter_radius_meters, decoy_count)?;
        Ok(ReportCreationService {
            pool,
            catalog_cache,
            stats,
            jitter_radius_meters,
            decoy_count,
        })
    }

    /// Creates one report from an untrusted payload.
    ///
    /// On success the new report identifier is returned and the submitted
    /// coordinate has been discarded; only jittered decoys were stored.
    /// Validation failures perform no side effects at all. Creation is not
    /// idempotent: a retried call re-runs the whole pipeline, producing a
    /// fresh jitter sample and a new document. Replaying a previously
    /// produced decoy set would undo the anonymization, so there is no
    /// retry inside the service.
    pub async fn create_report(&self, payload: &RawReportPayload) -> Result<String, ReportError> {
        let catalog = self.catalog_cache.get(&self.pool).await;

        let validated = validate(payload, &catalog).inspect_err(|e| {
            debug!("Rejected report payload: {e}");
            if let ReportError::InvalidArgument { field, .. } = e {
                self.stats.increment_error(rejection_type(field));
            }
        })?;

        // Preconditions were checked in new(); a failure here is a defect,
        // not a caller error.
        let decoys = jitter(
            validated.coordinate,
            self.jitter_radius_meters,
            self.decoy_count,
            &mut rand::rng(),
        )
        .map_err(|e| ReportError::Internal(e.into()))?;

        let geo_points: Vec<GeoPoint> = decoys
            .into_iter()
            .map(encode_geopoint)
            .collect::<Result<_, _>>()
            .map_err(|e| {
                error!("Failed to geohash jittered coordinate: {e}");
                self.stats.increment_error(ErrorType::GeohashError);
                ReportError::Internal(e.into())
            })?;

        let report_id = new_report_id(&mut rand::rng());
        let doc = to_document(validated, geo_points, report_id, Utc::now());

        insert_report(&self.pool, &doc).await.map_err(|e| {
            error!("Failed to persist report: {e}");
            self.stats.increment_error(ErrorType::PersistenceError);
            ReportError::from(e)
        })?;

        self.stats.record_created();
        info!("Created raid report {}", doc.report_id);
        Ok(doc.report_id)
    }

    /// The service's shared statistics counters.
    pub fn stats(&self) -> &Arc<ServiceStats> {
        &self.stats
    }
}

/// Maps a rejected field to its statistics category.
fn rejection_type(field: &str) -> ErrorType {
    match field {
        "coordinates" => ErrorType::InvalidCoordinates,
        "tacticsUsed" => ErrorType::InvalidTactics,
        "sourceOfInfoUrl" => ErrorType::InvalidSourceUrl,
        "dateOfRaid" => ErrorType::InvalidDate,
        _ => ErrorType::InvalidEnumField,
    }
}

/// Generates a fresh alphanumeric report identifier.
fn new_report_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..REPORT_ID_LENGTH)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}
