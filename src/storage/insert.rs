//! Report document insertion.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::storage::models::ReportDocument;

/// Inserts a report document and its decoy coordinates.
///
/// The report row and every coordinate row are written in one transaction: a
/// creation call persists the whole document or nothing, so readers never see
/// a report without its coordinates.
pub async fn insert_report(pool: &SqlitePool, doc: &ReportDocument) -> Result<(), DatabaseError> {
    let tactic_codes: Vec<String> = doc.tactics_used.iter().map(|t| t.to_string()).collect();
    let tactics_json = serde_json::to_string(&tactic_codes)?;

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO raid_reports (
            report_id, tactics_used, raid_location_category, detail_location,
            was_successful, location_reference, source_of_info, source_of_info_url,
            date_of_raid_ms, upvote_count, downvote_count, flag_count,
            created_at_ms, updated_at_ms
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&doc.report_id)
    .bind(&tactics_json)
    .bind(doc.raid_location_category.map(|v| v.to_string()))
    .bind(doc.detail_location.map(|v| v.to_string()))
    .bind(doc.was_successful.map(|v| v.to_string()))
    .bind(doc.location_reference.map(|v| v.to_string()))
    .bind(doc.source_of_info.map(|v| v.to_string()))
    .bind(doc.source_of_info_url.as_deref())
    .bind(doc.date_of_raid_ms)
    .bind(doc.upvote_count)
    .bind(doc.downvote_count)
    .bind(doc.flag_count)
    .bind(doc.created_at_ms)
    .bind(doc.updated_at_ms)
    .execute(&mut *tx)
    .await?;

    for (position, point) in doc.coordinates.iter().enumerate() {
        sqlx::query(
            "INSERT INTO report_coordinates (
                report_id, position, latitude, longitude, geohash
            ) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&doc.report_id)
        .bind(position as i64)
        .bind(point.geopoint.lat)
        .bind(point.geopoint.lon)
        .bind(&point.geohash)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
