use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::{MatchObservation, TeamHalfPair};

const OBSERVATION_COLUMNS: &str = "id, match_id, us, opposition, created_at, updated_at";

/// Insert or replace the observation for a match. Conflict target is
/// match_id, so a second save for the same match overwrites the first
/// (last write wins, no version check).
pub fn upsert(
    conn: &mut DbConn,
    match_id: i64,
    us: &TeamHalfPair,
    opposition: &TeamHalfPair,
    updated_at: NaiveDateTime,
) -> Result<MatchObservation> {
    let sql = format!(
        "INSERT INTO observations (match_id, us, opposition, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?4) \
         ON CONFLICT(match_id) DO UPDATE SET \
           us = excluded.us, \
           opposition = excluded.opposition, \
           updated_at = excluded.updated_at \
         RETURNING {OBSERVATION_COLUMNS}"
    );

    let us_json = serde_json::to_string(us).context("Failed to serialize our half stats")?;
    let opposition_json =
        serde_json::to_string(opposition).context("Failed to serialize opposition half stats")?;

    conn.query_row(
        &sql,
        params![match_id, us_json, opposition_json, updated_at],
        parse_observation_row,
    )
    .context("Failed to upsert observation")
}

pub fn get_by_match(conn: &mut DbConn, match_id: i64) -> Result<Option<MatchObservation>> {
    let sql = format!("SELECT {OBSERVATION_COLUMNS} FROM observations WHERE match_id = ?1");

    conn.query_row(&sql, params![match_id], parse_observation_row)
        .optional()
        .context("Failed to load observation for match")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchObservation>> {
    let sql = format!("SELECT {OBSERVATION_COLUMNS} FROM observations ORDER BY match_id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_observation_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// "Reset" for a match: drops the stored record entirely
pub fn delete(conn: &mut DbConn, match_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM observations WHERE match_id = ?1", params![match_id])
        .context("Failed to delete observation")
}

fn parse_observation_row(row: &rusqlite::Row) -> rusqlite::Result<MatchObservation> {
    let us_json: String = row.get(2)?;
    let opposition_json: String = row.get(3)?;

    Ok(MatchObservation {
        id: row.get(0)?,
        match_id: row.get(1)?,
        us: parse_half_pair(row, 2, &us_json)?,
        opposition: parse_half_pair(row, 3, &opposition_json)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn parse_half_pair(
    _row: &rusqlite::Row,
    column: usize,
    json: &str,
) -> rusqlite::Result<TeamHalfPair> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
