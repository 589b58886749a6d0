use serde::{Deserialize, Serialize};

use crate::domain::HalfStats;

/// Outcome of comparing the two weighted dominance scores.
/// A tie is a first-class outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    UsDominant,
    EvenlyMatched,
    OppositionDominant,
}

impl Verdict {
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::UsDominant => "us dominant",
            Verdict::EvenlyMatched => "evenly matched",
            Verdict::OppositionDominant => "opposition dominant",
        }
    }
}

/// The five weighted counters, in ascending order of threat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Deliveries,
    HalfChances,
    Chances,
    MassiveChancesNoShot,
    MassiveChancesShot,
}

pub const WEIGHTED_METRICS: [Metric; 5] = [
    Metric::Deliveries,
    Metric::HalfChances,
    Metric::Chances,
    Metric::MassiveChancesNoShot,
    Metric::MassiveChancesShot,
];

impl Metric {
    pub fn as_str(&self) -> &str {
        match self {
            Metric::Deliveries => "deliveries",
            Metric::HalfChances => "half chances",
            Metric::Chances => "chances",
            Metric::MassiveChancesNoShot => "massive chances (no shot)",
            Metric::MassiveChancesShot => "massive chances (shot)",
        }
    }

    pub fn value(&self, stats: &HalfStats) -> u32 {
        match self {
            Metric::Deliveries => stats.deliveries,
            Metric::HalfChances => stats.half_chances,
            Metric::Chances => stats.chances,
            Metric::MassiveChancesNoShot => stats.massive_chances_no_shot,
            Metric::MassiveChancesShot => stats.massive_chances_shot,
        }
    }
}

/// Which side leads a single metric by raw count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricLead {
    Us,
    Neutral,
    Opposition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDominance {
    pub metric: Metric,
    pub us: u32,
    pub opposition: u32,
    pub lead: MetricLead,
}

/// Season totals and per-game averages for one side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideAggregate {
    pub totals: HalfStats,
    pub averages: MetricAverages,
    /// Season clinicality as ratio of sums; None when no massive chances
    /// with a shot were recorded all season
    pub clinicality: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAverages {
    pub deliveries: f64,
    pub half_chances: f64,
    pub chances: f64,
    pub massive_chances_no_shot: f64,
    pub massive_chances_shot: f64,
    pub goals: f64,
}

/// When goals are scored and conceded, by half
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsByHalf {
    pub us_first_half: u32,
    pub us_second_half: u32,
    pub opposition_first_half: u32,
    pub opposition_second_half: u32,
}

/// Derived snapshot over all stored observations; recomputed on every
/// read, never persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonAggregate {
    pub games: usize,
    pub us: SideAggregate,
    pub opposition: SideAggregate,
    pub goals_by_half: GoalsByHalf,
}
