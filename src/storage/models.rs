//! Persisted document shapes.

use crate::enums::{
    DetailLocation, LocationReference, RaidLocationCategory, SourceOfInfo, Tactic, WasSuccessful,
};
use crate::geo::GeoPoint;

/// A raid report in its persisted shape.
///
/// Built exactly once per submission by the creation pipeline. Coordinates
/// are the jittered decoys only; the submitted coordinate does not appear
/// anywhere in this struct. Vote and flag counters start at zero and are
/// mutated only by the out-of-process vote collaborator via atomic
/// increments.
///
/// # Database Schema
///
/// Maps to the `raid_reports` table plus one `report_coordinates` row per
/// entry in `coordinates`. `tactics_used` is stored as a JSON array of codes;
/// timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    /// Generated identifier returned to the caller.
    pub report_id: String,
    /// Jittered decoy coordinates with their geohashes.
    pub coordinates: Vec<GeoPoint>,
    /// At least one tactic code.
    pub tactics_used: Vec<Tactic>,
    /// Optional location category.
    pub raid_location_category: Option<RaidLocationCategory>,
    /// Optional location detail.
    pub detail_location: Option<DetailLocation>,
    /// Optional outcome.
    pub was_successful: Option<WasSuccessful>,
    /// Optional location reference.
    pub location_reference: Option<LocationReference>,
    /// Optional source of the information.
    pub source_of_info: Option<SourceOfInfo>,
    /// Optional source URL, already validated.
    pub source_of_info_url: Option<String>,
    /// When the reported action happened, epoch milliseconds.
    pub date_of_raid_ms: Option<i64>,
    /// Upvotes, initialized to zero.
    pub upvote_count: i64,
    /// Downvotes, initialized to zero.
    pub downvote_count: i64,
    /// Flags, initialized to zero.
    pub flag_count: i64,
    /// Server-assigned creation time, epoch milliseconds.
    pub created_at_ms: i64,
    /// Server-assigned update time; equals `created_at_ms` at creation.
    pub updated_at_ms: i64,
}
