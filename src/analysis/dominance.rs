use crate::config::ScoringSettings;
use crate::domain::HalfStats;

use super::types::{Metric, MetricDominance, MetricLead, Verdict, WEIGHTED_METRICS};

/// Weighted dominance score for one side's totals. Measures chance
/// creation and quality, so goals carry no weight here.
pub fn score(stats: &HalfStats, weights: &ScoringSettings) -> u32 {
    stats.deliveries * weights.delivery_weight
        + stats.half_chances * weights.half_chance_weight
        + stats.chances * weights.chance_weight
        + stats.massive_chances_no_shot * weights.massive_no_shot_weight
        + stats.massive_chances_shot * weights.massive_shot_weight
}

/// Strictly greater score wins; equal scores (including 0-0) are a tie
pub fn verdict(us_score: u32, opposition_score: u32) -> Verdict {
    if us_score > opposition_score {
        Verdict::UsDominant
    } else if opposition_score > us_score {
        Verdict::OppositionDominant
    } else {
        Verdict::EvenlyMatched
    }
}

/// Per-metric comparison of raw counts, independent of the weighted score
pub fn metric_breakdown(us: &HalfStats, opposition: &HalfStats) -> Vec<MetricDominance> {
    WEIGHTED_METRICS
        .iter()
        .map(|metric| compare_metric(*metric, us, opposition))
        .collect()
}

fn compare_metric(metric: Metric, us: &HalfStats, opposition: &HalfStats) -> MetricDominance {
    let ours = metric.value(us);
    let theirs = metric.value(opposition);

    let lead = if ours > theirs {
        MetricLead::Us
    } else if theirs > ours {
        MetricLead::Opposition
    } else {
        MetricLead::Neutral
    };

    MetricDominance {
        metric,
        us: ours,
        opposition: theirs,
        lead,
    }
}
