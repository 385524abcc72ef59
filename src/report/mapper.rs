//! Mapping a validated report to its persisted document shape.

use chrono::{DateTime, Utc};

use crate::geo::GeoPoint;
use crate::report::payload::ValidatedReport;
use crate::storage::models::ReportDocument;

/// Builds the persisted document from a validated report and its decoys.
///
/// Pure transformation. The true coordinate inside `validated` is consumed
/// and dropped here; only `geo_points` (the jittered decoys) carry location
/// into storage. `now` is server-assigned so clients cannot spoof creation
/// timestamps, and seeds both `created_at` and `updated_at`. All vote and
/// flag counters start at zero.
pub fn to_document(
    validated: ValidatedReport,
    geo_points: Vec<GeoPoint>,
    report_id: String,
    now: DateTime<Utc>,
) -> ReportDocument {
    let now_ms = now.timestamp_millis();
    ReportDocument {
        report_id,
        coordinates: geo_points,
        tactics_used: validated.tactics_used,
        raid_location_category: validated.raid_location_category,
        detail_location: validated.detail_location,
        was_successful: validated.was_successful,
        location_reference: validated.location_reference,
        source_of_info: validated.source_of_info,
        source_of_info_url: validated.source_of_info_url.map(|u| u.to_string()),
        date_of_raid_ms: validated.date_of_raid.map(|d| d.timestamp_millis()),
        upvote_count: 0,
        downvote_count: 0,
        flag_count: 0,
        created_at_ms: now_ms,
        updated_at_ms: now_ms,
    }
}
