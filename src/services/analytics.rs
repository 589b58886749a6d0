use anyhow::Result;
use colored::Colorize;

use crate::analysis::{self, MetricDominance, MetricLead, SeasonAggregate, Verdict};
use crate::config::AppConfig;
use crate::database::{self, matches, observations, DbPool};
use crate::domain::{MatchObservation, MatchRecord};

/// Single-match verdict plus its supporting numbers
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub observation: MatchObservation,
    pub context: Option<MatchRecord>,
    pub us_score: u32,
    pub opposition_score: u32,
    pub verdict: Verdict,
    pub breakdown: Vec<MetricDominance>,
    pub us_clinicality: Option<u32>,
    pub opposition_clinicality: Option<u32>,
}

/// Read-side of the subsystem: recomputes scores and season tables from
/// the store on every call, holding no derived state of its own.
pub struct AnalyticsService {
    pool: DbPool,
    config: AppConfig,
}

impl AnalyticsService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    pub fn match_report(&self, match_id: i64) -> Result<Option<MatchReport>> {
        let mut conn = database::get_connection(&self.pool)?;

        let Some(observation) = observations::get_by_match(&mut conn, match_id)? else {
            return Ok(None);
        };
        let context = matches::get(&mut conn, match_id)?;

        let us_totals = observation.us.totals();
        let opposition_totals = observation.opposition.totals();

        let us_score = analysis::score(&us_totals, &self.config.scoring);
        let opposition_score = analysis::score(&opposition_totals, &self.config.scoring);

        Ok(Some(MatchReport {
            us_score,
            opposition_score,
            verdict: analysis::verdict(us_score, opposition_score),
            breakdown: analysis::metric_breakdown(&us_totals, &opposition_totals),
            us_clinicality: analysis::clinicality::match_rate(&observation.us),
            opposition_clinicality: analysis::clinicality::match_rate(&observation.opposition),
            observation,
            context,
        }))
    }

    pub fn season_report(&self) -> Result<SeasonAggregate> {
        let mut conn = database::get_connection(&self.pool)?;
        let all = observations::list_all(&mut conn)?;
        Ok(analysis::aggregate(&all))
    }
}

pub fn print_match_report(report: &MatchReport) {
    if let Some(context) = &report.context {
        let venue = if context.home { "home" } else { "away" };
        println!("Match {} - {} ({})", context.id, context.opponent.bold(), venue);
    } else {
        println!("Match {}", report.observation.match_id);
    }

    println!(
        "Dominance (excluding goals): us {} - {} opposition",
        report.us_score.to_string().bold(),
        report.opposition_score.to_string().bold()
    );
    println!("Verdict: {}", colored_verdict(report.verdict));

    println!("\nPer-metric breakdown:");
    for entry in &report.breakdown {
        println!(
            "  {:<26} {:>3} v {:<3} {}",
            entry.metric.as_str(),
            entry.us,
            entry.opposition,
            lead_label(entry.lead)
        );
    }

    println!(
        "\nClinicality: us {}, opposition {}",
        rate_label(report.us_clinicality),
        rate_label(report.opposition_clinicality)
    );
}

pub fn print_season_report(season: &SeasonAggregate) {
    println!("Season over {} recorded matches", season.games.to_string().bold());

    println!("\n{:<26} {:>8} {:>8} {:>8} {:>8}", "metric", "us tot", "us avg", "opp tot", "opp avg");
    let rows = [
        ("deliveries", season.us.totals.deliveries, season.us.averages.deliveries, season.opposition.totals.deliveries, season.opposition.averages.deliveries),
        ("half chances", season.us.totals.half_chances, season.us.averages.half_chances, season.opposition.totals.half_chances, season.opposition.averages.half_chances),
        ("chances", season.us.totals.chances, season.us.averages.chances, season.opposition.totals.chances, season.opposition.averages.chances),
        ("massive chances (no shot)", season.us.totals.massive_chances_no_shot, season.us.averages.massive_chances_no_shot, season.opposition.totals.massive_chances_no_shot, season.opposition.averages.massive_chances_no_shot),
        ("massive chances (shot)", season.us.totals.massive_chances_shot, season.us.averages.massive_chances_shot, season.opposition.totals.massive_chances_shot, season.opposition.averages.massive_chances_shot),
        ("goals", season.us.totals.goals, season.us.averages.goals, season.opposition.totals.goals, season.opposition.averages.goals),
    ];
    for (name, us_total, us_avg, opp_total, opp_avg) in rows {
        println!("{name:<26} {us_total:>8} {us_avg:>8.1} {opp_total:>8} {opp_avg:>8.1}");
    }

    println!(
        "\nSeason clinicality: us {}, opposition {}",
        rate_label(season.us.clinicality),
        rate_label(season.opposition.clinicality)
    );

    let halves = &season.goals_by_half;
    println!(
        "Goals by half: scored {} / {}, conceded {} / {}",
        halves.us_first_half, halves.us_second_half,
        halves.opposition_first_half, halves.opposition_second_half
    );
}

fn colored_verdict(verdict: Verdict) -> colored::ColoredString {
    match verdict {
        Verdict::UsDominant => verdict.as_str().green().bold(),
        Verdict::EvenlyMatched => verdict.as_str().yellow(),
        Verdict::OppositionDominant => verdict.as_str().red().bold(),
    }
}

fn lead_label(lead: MetricLead) -> colored::ColoredString {
    match lead {
        MetricLead::Us => "us".green(),
        MetricLead::Neutral => "-".normal(),
        MetricLead::Opposition => "opposition".red(),
    }
}

fn rate_label(rate: Option<u32>) -> String {
    match rate {
        Some(percent) => format!("{percent}%"),
        None => "no data".to_string(),
    }
}
