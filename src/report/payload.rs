//! Inbound payload shapes.
//!
//! `RawReportPayload` is the untrusted wire shape; nothing downstream of the
//! validator ever touches it. `ValidatedReport` is the typed shape the
//! pipeline operates on and can only be produced by
//! [`super::validate::validate`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::enums::{
    DetailLocation, LocationReference, RaidLocationCategory, SourceOfInfo, Tactic, WasSuccessful,
};
use crate::geo::Coordinate;

/// The untrusted report-creation request body (`/v1` contract).
///
/// One true coordinate in; required non-empty `tacticsUsed`; everything else
/// optional. Absent and `null` fields are equivalent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawReportPayload {
    /// The exact location being reported. Consumed by the jitter stage and
    /// never persisted.
    pub coordinates: Option<Coordinate>,
    /// Tactic codes; must be non-empty and all from the allowed set.
    pub tactics_used: Option<Vec<String>>,
    /// Optional ISO-8601 timestamp of the reported action.
    pub date_of_raid: Option<String>,
    /// Optional location category code.
    pub raid_location_category: Option<String>,
    /// Optional detail location code.
    pub detail_location: Option<String>,
    /// Optional outcome code.
    pub was_successful: Option<String>,
    /// Optional location reference code.
    pub location_reference: Option<String>,
    /// Optional source-of-info code.
    pub source_of_info: Option<String>,
    /// Optional source URL; must be a well-formed http(s) URL when present.
    pub source_of_info_url: Option<String>,
}

/// A fully validated report, ready for the jitter/encode/persist stages.
///
/// Holds the true coordinate only transiently; the mapper drops it when the
/// persisted document is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReport {
    /// The submitted true coordinate.
    pub coordinate: Coordinate,
    /// At least one validated tactic.
    pub tactics_used: Vec<Tactic>,
    /// When the reported action happened.
    pub date_of_raid: Option<DateTime<Utc>>,
    /// Validated location category.
    pub raid_location_category: Option<RaidLocationCategory>,
    /// Validated detail location.
    pub detail_location: Option<DetailLocation>,
    /// Validated outcome.
    pub was_successful: Option<WasSuccessful>,
    /// Validated location reference.
    pub location_reference: Option<LocationReference>,
    /// Validated source of info.
    pub source_of_info: Option<SourceOfInfo>,
    /// Validated source URL.
    pub source_of_info_url: Option<Url>,
}
