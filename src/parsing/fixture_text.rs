use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::config::ClubSettings;
use crate::domain::{Fixture, MatchResult, Venue};

/// Heuristic fixture-list parser for pasted or OCR'd text. Each line is
/// probed independently for a date-like token, a "vs"/"v" separator and
/// an N-N score; any one of them qualifies the line as a candidate.
/// Nothing it emits is trusted - the operator corrects every field
/// before anything is committed.
pub struct FixtureParser {
    club_name: String,
    date_token: Regex,
    score_token: Regex,
    separator_token: Regex,
}

impl FixtureParser {
    pub fn new(club: &ClubSettings) -> Result<Self> {
        Ok(Self {
            club_name: club.club_name.clone(),
            date_token: Regex::new(r"\b\d{1,2}[./-]\d{1,2}(?:[./-]\d{2,4})?\b")
                .context("Failed to compile date token pattern")?,
            score_token: Regex::new(r"\b(\d{1,2})\s*-\s*(\d{1,2})\b")
                .context("Failed to compile score token pattern")?,
            separator_token: Regex::new(r"(?i)\b(?:vs\.?|v)\b")
                .context("Failed to compile separator pattern")?,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<Fixture> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    /// None means the line carried no fixture-like token at all; that
    /// is not an error, the line is simply skipped.
    fn parse_line(&self, line: &str) -> Option<Fixture> {
        let score = self.score_token.captures(line);
        let separator = self.separator_token.find(line);
        // An N-N score also looks date-like, so a token overlapping the
        // score is not taken as a date
        let date = self
            .date_token
            .find(line)
            .filter(|m| !overlaps_score(m, &score));

        if date.is_none() && score.is_none() && separator.is_none() {
            return None;
        }
        debug!("fixture candidate line: {}", line);

        let venue = self.infer_venue(line, &score, &separator);
        let scoreline = score
            .as_ref()
            .map(|caps| format!("{}-{}", &caps[1], &caps[2]));
        let result = self.derive_result(&score, venue);

        Some(Fixture {
            date: date.map(|m| m.as_str().to_string()),
            opponent: self.residual_opponent(line, &date, &score),
            venue,
            scoreline,
            result,
        })
    }

    /// Home when our club name sits before the separator (or the score
    /// when no separator was found), away when after
    fn infer_venue(
        &self,
        line: &str,
        score: &Option<regex::Captures>,
        separator: &Option<regex::Match>,
    ) -> Option<Venue> {
        let club_at = find_case_insensitive(line, &self.club_name)?;
        let pivot = separator
            .as_ref()
            .map(|m| m.start())
            .or_else(|| score.as_ref().map(|caps| caps.get(0).unwrap().start()))?;

        if club_at < pivot {
            Some(Venue::Home)
        } else {
            Some(Venue::Away)
        }
    }

    /// Same scoreline-plus-venue comparison the match result display
    /// uses: equal scores draw, otherwise the higher score wins from
    /// its own perspective
    fn derive_result(
        &self,
        score: &Option<regex::Captures>,
        venue: Option<Venue>,
    ) -> Option<MatchResult> {
        let caps = score.as_ref()?;
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;

        let (ours, theirs) = match venue? {
            Venue::Home => (first, second),
            Venue::Away => (second, first),
        };

        Some(MatchResult::from_scores(ours, theirs))
    }

    /// Opponent name is whatever survives stripping the date, the
    /// score, the separator and our own club name from the line
    fn residual_opponent(
        &self,
        line: &str,
        date: &Option<regex::Match>,
        score: &Option<regex::Captures>,
    ) -> String {
        let mut residual = line.to_string();

        if let Some(m) = date {
            residual = residual.replace(m.as_str(), " ");
        }
        if let Some(caps) = score {
            residual = residual.replace(&caps[0], " ");
        }
        residual = self.separator_token.replace_all(&residual, " ").to_string();
        residual = strip_case_insensitive(&residual, &self.club_name);

        residual
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
            .to_string()
    }
}

fn overlaps_score(candidate: &regex::Match, score: &Option<regex::Captures>) -> bool {
    let Some(caps) = score else {
        return false;
    };
    let score_match = caps.get(0).unwrap();
    candidate.start() < score_match.end() && score_match.start() < candidate.end()
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn strip_case_insensitive(haystack: &str, needle: &str) -> String {
    match find_case_insensitive(haystack, needle) {
        Some(at) => {
            let mut out = String::with_capacity(haystack.len());
            out.push_str(&haystack[..at]);
            out.push(' ');
            out.push_str(&haystack[at + needle.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> FixtureParser {
        FixtureParser::new(&ClubSettings {
            club_name: "Rovers".to_string(),
        })
        .expect("patterns should compile")
    }

    #[test]
    fn home_win_line_is_fully_recovered() {
        let fixtures = parser().parse("12/03 Rovers vs United 3-1");

        assert_eq!(fixtures.len(), 1);
        let fixture = &fixtures[0];
        assert_eq!(fixture.date.as_deref(), Some("12/03"));
        assert_eq!(fixture.opponent, "United");
        assert_eq!(fixture.venue, Some(Venue::Home));
        assert_eq!(fixture.scoreline.as_deref(), Some("3-1"));
        assert_eq!(fixture.result, Some(MatchResult::Win));
    }

    #[test]
    fn away_result_reads_the_score_from_our_side() {
        let fixtures = parser().parse("City v Rovers 2-2\nAthletic vs Rovers 3-0");

        assert_eq!(fixtures[0].venue, Some(Venue::Away));
        assert_eq!(fixtures[0].result, Some(MatchResult::Draw));
        assert_eq!(fixtures[1].result, Some(MatchResult::Loss));
        assert_eq!(fixtures[1].opponent, "Athletic");
    }

    #[test]
    fn any_single_token_qualifies_a_line() {
        let fixtures = parser().parse("28.09.2025 Wanderers\nRovers vs County\nTown 0-0 Rovers");

        assert_eq!(fixtures.len(), 3);
        assert_eq!(fixtures[0].date.as_deref(), Some("28.09.2025"));
        assert_eq!(fixtures[0].opponent, "Wanderers");
        assert!(fixtures[0].scoreline.is_none());
        assert!(fixtures[0].result.is_none());
        assert_eq!(fixtures[1].opponent, "County");
        assert_eq!(fixtures[2].venue, Some(Venue::Away));
    }

    #[test]
    fn token_free_lines_are_skipped_silently() {
        let fixtures = parser().parse("Upcoming fixtures\n---\nno match here");
        assert!(fixtures.is_empty());
    }

    #[test]
    fn missing_club_name_leaves_venue_and_result_open() {
        let fixtures = parser().parse("United v City 2-1");

        assert_eq!(fixtures.len(), 1);
        assert!(fixtures[0].venue.is_none());
        assert!(fixtures[0].result.is_none());
        assert_eq!(fixtures[0].scoreline.as_deref(), Some("2-1"));
    }
}
