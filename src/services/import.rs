use anyhow::Result;
use chrono::Utc;
use log::{info, warn};

use crate::config::AppConfig;
use crate::database::{self, observations, DbPool};
use crate::domain::MatchObservation;
use crate::errors::WatcherError;
use crate::ocr::OcrClient;
use crate::parsing::parse_stats_text;

/// Fixed sample used by the demo import; runs through the same parse
/// and upsert pipeline as a real screenshot
const DEMO_SAMPLE_TEXT: &str = "\
Match Stats Overview
1st Half
Us 12 4 3 2 1
Opposition 6 2 1 0 0
2nd Half
Us 9 3 2 1 1
Opposition 11 2 2 1 1
";

/// Takes a screenshot or pasted text for a pre-selected match, parses
/// it and upserts the observation keyed by match id. A failed parse
/// never touches stored state.
pub struct ImportService {
    pool: DbPool,
    ocr: OcrClient,
}

impl ImportService {
    pub fn new(pool: DbPool, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            pool,
            ocr: OcrClient::new(&config.ocr)?,
        })
    }

    pub async fn import_image(
        &self,
        match_id: Option<i64>,
        image: Vec<u8>,
    ) -> Result<MatchObservation> {
        // Fail fast before any recognition work is spent
        let match_id = selected_match(match_id)?;

        let recognized = self.ocr.recognize(image).await?;
        // The screenshot table has no no-shot massive chance column, so
        // that counter stays zero until the operator corrects it
        warn!("massive chances without a shot are not recoverable from OCR, defaulting to 0");
        self.parse_and_save(match_id, &recognized.text)
    }

    pub fn import_text(&self, match_id: Option<i64>, raw_text: &str) -> Result<MatchObservation> {
        let match_id = selected_match(match_id)?;
        self.parse_and_save(match_id, raw_text)
    }

    pub fn import_demo(&self, match_id: Option<i64>) -> Result<MatchObservation> {
        let match_id = selected_match(match_id)?;
        info!("Importing canned demo stats for match {}", match_id);
        self.parse_and_save(match_id, DEMO_SAMPLE_TEXT)
    }

    /// "Reset": drop the stored observation for a match entirely
    pub fn reset(&self, match_id: i64) -> Result<bool> {
        let mut conn = database::get_connection(&self.pool)?;
        let deleted = observations::delete(&mut conn, match_id)?;
        info!("Reset observation for match {} (deleted {})", match_id, deleted);
        Ok(deleted > 0)
    }

    fn parse_and_save(&self, match_id: i64, raw_text: &str) -> Result<MatchObservation> {
        let parsed = parse_stats_text(raw_text)?;

        let mut conn = database::get_connection(&self.pool)?;
        let saved = observations::upsert(
            &mut conn,
            match_id,
            &parsed.us,
            &parsed.opposition,
            Utc::now().naive_utc(),
        )?;

        info!("Saved observation for match {}", match_id);
        Ok(saved)
    }
}

fn selected_match(match_id: Option<i64>) -> Result<i64, WatcherError> {
    match_id.ok_or(WatcherError::NoMatchSelected)
}
