//! Payload validation.
//!
//! Pure and fail-fast: the first failing field aborts validation and its wire
//! name is reported back to the caller. The allowed enumeration codes arrive
//! as an [`EnumCatalog`] parameter, so the validator has no ambient state and
//! can be tested against arbitrary catalog versions.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use url::Url;

use crate::enums::{
    DetailLocation, EnumCatalog, LocationReference, RaidLocationCategory, SourceOfInfo, Tactic,
    WasSuccessful,
};
use crate::error_handling::ReportError;
use crate::report::payload::{RawReportPayload, ValidatedReport};

/// Validates an untrusted payload against the given enumeration catalog.
///
/// Rules, checked in order:
/// - `coordinates` present, finite, inside WGS84 ranges
/// - `tacticsUsed` present, non-empty, every code in the allowed tactic set
/// - each optional enum field, when present, in its respective closed set
/// - `dateOfRaid`, when present, a parseable ISO-8601 timestamp
/// - `sourceOfInfoUrl`, when present, an http(s) URL with a host
pub fn validate(
    payload: &RawReportPayload,
    catalog: &EnumCatalog,
) -> Result<ValidatedReport, ReportError> {
    let coordinate = match payload.coordinates {
        Some(coord) if coord.is_valid() => coord,
        Some(coord) => {
            return Err(ReportError::invalid_argument(
                "coordinates",
                format!("lat/lng out of range: ({}, {})", coord.lat, coord.lon),
            ));
        }
        None => {
            return Err(ReportError::invalid_argument(
                "coordinates",
                "missing coordinates",
            ));
        }
    };

    let tactic_codes = payload
        .tactics_used
        .as_deref()
        .filter(|codes| !codes.is_empty())
        .ok_or_else(|| {
            ReportError::invalid_argument("tacticsUsed", "at least one tactic is required")
        })?;
    let mut tactics_used = Vec::with_capacity(tactic_codes.len());
    for code in tactic_codes {
        tactics_used.push(parse_code::<Tactic>(
            code,
            &catalog.tactics,
            "tacticsUsed",
            "tactic",
        )?);
    }

    let raid_location_category = parse_optional_code::<RaidLocationCategory>(
        payload.raid_location_category.as_deref(),
        &catalog.raid_location_categories,
        "raidLocationCategory",
        "raid location category",
    )?;
    let detail_location = parse_optional_code::<DetailLocation>(
        payload.detail_location.as_deref(),
        &catalog.detail_locations,
        "detailLocation",
        "detail location",
    )?;
    let was_successful = parse_optional_code::<WasSuccessful>(
        payload.was_successful.as_deref(),
        &catalog.was_successful,
        "wasSuccessful",
        "outcome",
    )?;
    let location_reference = parse_optional_code::<LocationReference>(
        payload.location_reference.as_deref(),
        &catalog.location_references,
        "locationReference",
        "location reference",
    )?;
    let source_of_info = parse_optional_code::<SourceOfInfo>(
        payload.source_of_info.as_deref(),
        &catalog.sources_of_info,
        "sourceOfInfo",
        "source of info",
    )?;

    let date_of_raid = payload
        .date_of_raid
        .as_deref()
        .map(parse_date_of_raid)
        .transpose()?;

    let source_of_info_url = payload
        .source_of_info_url
        .as_deref()
        .map(parse_source_url)
        .transpose()?;

    Ok(ValidatedReport {
        coordinate,
        tactics_used,
        date_of_raid,
        raid_location_category,
        detail_location,
        was_successful,
        location_reference,
        source_of_info,
        source_of_info_url,
    })
}

/// Checks catalog membership, then parses the typed representation.
///
/// Membership is the authority; a code the catalog allows but this binary
/// cannot represent (catalog version ahead of the deploy) is still rejected,
/// naming the field.
fn parse_code<T: FromStr>(
    code: &str,
    allowed: &HashSet<String>,
    field: &'static str,
    noun: &str,
) -> Result<T, ReportError> {
    if !allowed.contains(code) {
        return Err(ReportError::invalid_argument(
            field,
            format!("unknown {noun} code '{code}'"),
        ));
    }
    T::from_str(code).map_err(|_| {
        ReportError::invalid_argument(field, format!("unsupported {noun} code '{code}'"))
    })
}

fn parse_optional_code<T: FromStr>(
    code: Option<&str>,
    allowed: &HashSet<String>,
    field: &'static str,
    noun: &str,
) -> Result<Option<T>, ReportError> {
    code.map(|c| parse_code(c, allowed, field, noun)).transpose()
}

fn parse_date_of_raid(raw: &str) -> Result<DateTime<Utc>, ReportError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            ReportError::invalid_argument("dateOfRaid", format!("not an ISO-8601 timestamp: {e}"))
        })
}

fn parse_source_url(raw: &str) -> Result<Url, ReportError> {
    let url = Url::parse(raw)
        .map_err(|e| ReportError::invalid_argument("sourceOfInfoUrl", format!("not a URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ReportError::invalid_argument(
                "sourceOfInfoUrl",
                format!("scheme '{scheme}' not allowed, use http or https"),
            ));
        }
    }
    if !url.has_host() {
        return Err(ReportError::invalid_argument(
            "sourceOfInfoUrl",
            "URL has no host",
        ));
    }
    Ok(url)
}
