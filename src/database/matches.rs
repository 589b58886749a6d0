use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::MatchRecord;

// The matches table is owned by the surrounding club dashboard; this
// subsystem only reads it for display context.

pub fn get(conn: &mut DbConn, match_id: i64) -> Result<Option<MatchRecord>> {
    let sql = "SELECT id, opponent, home, scoreline FROM matches WHERE id = ?1";

    conn.query_row(sql, params![match_id], parse_match_row)
        .optional()
        .context("Failed to load match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        opponent: row.get(1)?,
        home: row.get(2)?,
        scoreline: row.get(3)?,
    })
}
