use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-team, per-half observational counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfStats {
    pub deliveries: u32,
    pub half_chances: u32,
    pub chances: u32,
    pub massive_chances_no_shot: u32,
    pub massive_chances_shot: u32,
    pub goals: u32,
}

impl HalfStats {
    /// Field-wise sum, used to merge first and second half into match totals
    pub fn add(&self, other: &HalfStats) -> HalfStats {
        HalfStats {
            deliveries: self.deliveries + other.deliveries,
            half_chances: self.half_chances + other.half_chances,
            chances: self.chances + other.chances,
            massive_chances_no_shot: self.massive_chances_no_shot + other.massive_chances_no_shot,
            massive_chances_shot: self.massive_chances_shot + other.massive_chances_shot,
            goals: self.goals + other.goals,
        }
    }
}

/// Both halves for one side of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHalfPair {
    pub first_half: HalfStats,
    pub second_half: HalfStats,
}

impl TeamHalfPair {
    pub fn totals(&self) -> HalfStats {
        self.first_half.add(&self.second_half)
    }
}

/// The persisted per-match statistical record, at most one per match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchObservation {
    pub id: i64,
    pub match_id: i64,
    pub us: TeamHalfPair,
    pub opposition: TeamHalfPair,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Match context from the matches table, read-only here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub opponent: String,
    pub home: bool,
    pub scoreline: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn as_str(&self) -> &str {
        match self {
            Venue::Home => "home",
            Venue::Away => "away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Result from our perspective given a goals-for/goals-against pair
    pub fn from_scores(ours: u32, theirs: u32) -> Self {
        if ours > theirs {
            MatchResult::Win
        } else if ours < theirs {
            MatchResult::Loss
        } else {
            MatchResult::Draw
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchResult::Win => "win",
            MatchResult::Draw => "draw",
            MatchResult::Loss => "loss",
        }
    }
}

/// Best-effort fixture candidate recovered from pasted or OCR'd text.
/// Every field is open to operator correction before anything is committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub date: Option<String>,
    pub opponent: String,
    pub venue: Option<Venue>,
    pub scoreline: Option<String>,
    pub result: Option<MatchResult>,
}
