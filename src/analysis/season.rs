use log::info;

use crate::domain::{HalfStats, MatchObservation, TeamHalfPair};

use super::clinicality;
use super::types::{GoalsByHalf, MetricAverages, SeasonAggregate, SideAggregate};

/// Fold every stored observation into a season snapshot. Pure function
/// of its input; callers re-run it on each view so the result always
/// matches current store contents.
pub fn aggregate(observations: &[MatchObservation]) -> SeasonAggregate {
    let games = observations.len();
    info!("Aggregating season stats over {} matches", games);

    let us_pairs: Vec<&TeamHalfPair> = observations.iter().map(|o| &o.us).collect();
    let opposition_pairs: Vec<&TeamHalfPair> = observations.iter().map(|o| &o.opposition).collect();

    SeasonAggregate {
        games,
        us: aggregate_side(&us_pairs, games),
        opposition: aggregate_side(&opposition_pairs, games),
        goals_by_half: goals_by_half(observations),
    }
}

fn aggregate_side(pairs: &[&TeamHalfPair], games: usize) -> SideAggregate {
    let totals = pairs
        .iter()
        .fold(HalfStats::default(), |acc, pair| acc.add(&pair.totals()));

    SideAggregate {
        totals,
        averages: averages(&totals, games),
        clinicality: clinicality::season_rate(pairs.iter().copied()),
    }
}

/// Per-game averages. The divisor is floored at 1 so an empty season
/// reports zeros instead of NaN.
fn averages(totals: &HalfStats, games: usize) -> MetricAverages {
    let divisor = games.max(1) as f64;

    MetricAverages {
        deliveries: f64::from(totals.deliveries) / divisor,
        half_chances: f64::from(totals.half_chances) / divisor,
        chances: f64::from(totals.chances) / divisor,
        massive_chances_no_shot: f64::from(totals.massive_chances_no_shot) / divisor,
        massive_chances_shot: f64::from(totals.massive_chances_shot) / divisor,
        goals: f64::from(totals.goals) / divisor,
    }
}

/// Separate reduction for the "when do we score and concede" view
fn goals_by_half(observations: &[MatchObservation]) -> GoalsByHalf {
    let mut breakdown = GoalsByHalf::default();

    for observation in observations {
        breakdown.us_first_half += observation.us.first_half.goals;
        breakdown.us_second_half += observation.us.second_half.goals;
        breakdown.opposition_first_half += observation.opposition.first_half.goals;
        breakdown.opposition_second_half += observation.opposition.second_half.goals;
    }

    breakdown
}
