use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::domain::Fixture;
use crate::ocr::OcrClient;
use crate::parsing::FixtureParser;

/// Best-effort fixture-list ingestion from pasted text or a screenshot.
/// Emits candidates only; committing corrected fixtures belongs to the
/// dashboard layer.
pub struct FixtureImportService {
    parser: FixtureParser,
    ocr: OcrClient,
}

impl FixtureImportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            parser: FixtureParser::new(&config.club)?,
            ocr: OcrClient::new(&config.ocr)?,
        })
    }

    pub fn from_text(&self, text: &str) -> Vec<Fixture> {
        let fixtures = self.parser.parse(text);
        info!("Recovered {} fixture candidates from text", fixtures.len());
        fixtures
    }

    pub async fn from_image(&self, image: Vec<u8>) -> Result<Vec<Fixture>> {
        let recognized = self.ocr.recognize(image).await?;
        Ok(self.from_text(&recognized.text))
    }
}

/// One reviewable line per candidate; fields the heuristics could not
/// recover print as "?" so the operator knows what to fill in
pub fn print_fixtures(fixtures: &[Fixture]) {
    if fixtures.is_empty() {
        println!("No fixture candidates recovered");
        return;
    }
    for fixture in fixtures {
        println!("{}", render_fixture_line(fixture));
    }
}

pub fn render_fixture_line(fixture: &Fixture) -> String {
    let date = fixture.date.as_deref().unwrap_or("?");
    let venue = match &fixture.venue {
        Some(venue) => venue.as_str(),
        None => "?",
    };
    let scoreline = fixture.scoreline.as_deref().unwrap_or("?");
    let result = match &fixture.result {
        Some(result) => result.as_str(),
        None => "?",
    };

    format!(
        "{date:<12} {opponent:<24} {venue:<5} {scoreline:>5} {result}",
        opponent = fixture.opponent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchResult, Venue};

    #[test]
    fn render_shows_every_recovered_field() {
        let fixture = Fixture {
            date: Some("12/03".to_string()),
            opponent: "United".to_string(),
            venue: Some(Venue::Home),
            scoreline: Some("3-1".to_string()),
            result: Some(MatchResult::Win),
        };

        let line = render_fixture_line(&fixture);
        assert!(line.contains("12/03"));
        assert!(line.contains("United"));
        assert!(line.contains("home"));
        assert!(line.contains("3-1"));
        assert!(line.contains("win"));
    }

    #[test]
    fn render_marks_unrecovered_fields_for_correction() {
        let fixture = Fixture {
            date: None,
            opponent: "Wanderers".to_string(),
            venue: None,
            scoreline: None,
            result: None,
        };

        let line = render_fixture_line(&fixture);
        assert!(line.contains("Wanderers"));
        // date, venue, scoreline and result are all unknown
        assert_eq!(line.matches('?').count(), 4);
    }
}
