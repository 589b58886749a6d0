pub mod clinicality;
pub mod dominance;
pub mod season;
pub mod types;

pub use dominance::{metric_breakdown, score, verdict};
pub use season::aggregate;
pub use types::{
    GoalsByHalf, Metric, MetricAverages, MetricDominance, MetricLead, SeasonAggregate,
    SideAggregate, Verdict,
};
