use match_watcher::analysis::Verdict;
use match_watcher::config::AppConfig;
use match_watcher::database::{self, observations, DbPool};
use match_watcher::domain::{HalfStats, TeamHalfPair};
use match_watcher::errors::WatcherError;
use match_watcher::services::{AnalyticsService, ImportService};

const MATCH_TEXT: &str = "\
1st Half
Us 10 3 2 1 1
Them 5 1 1 0 0
2nd Half
Us 7 2 2 1 0
Them 9 3 1 1 1
";

fn test_pool() -> DbPool {
    let pool = database::create_memory_pool().expect("memory pool should build");
    let mut conn = database::get_connection(&pool).expect("connection should be available");
    database::setup::init_schema(&mut conn).expect("schema should apply");
    pool
}

fn half(deliveries: u32, goals: u32) -> TeamHalfPair {
    TeamHalfPair {
        first_half: HalfStats {
            deliveries,
            goals,
            ..HalfStats::default()
        },
        second_half: HalfStats::default(),
    }
}

#[test]
fn import_text_parses_and_persists_the_observation() {
    let pool = test_pool();
    let service = ImportService::new(pool.clone(), &AppConfig::new()).expect("service should build");

    let saved = service.import_text(Some(7), MATCH_TEXT).expect("import should succeed");

    assert_eq!(saved.match_id, 7);
    assert_eq!(saved.us.first_half.deliveries, 10);
    assert_eq!(saved.us.first_half.goals, 1);
    assert_eq!(saved.opposition.second_half.deliveries, 9);
    // Not recoverable from the screenshot table, forced to zero
    assert_eq!(saved.us.first_half.massive_chances_no_shot, 0);

    let mut conn = database::get_connection(&pool).expect("connection should be available");
    let stored = observations::get_by_match(&mut conn, 7)
        .expect("load should succeed")
        .expect("observation should exist");
    assert_eq!(stored.us, saved.us);
    assert_eq!(stored.opposition, saved.opposition);
}

#[test]
fn import_without_a_selected_match_fails_fast() {
    let service = ImportService::new(test_pool(), &AppConfig::new()).expect("service should build");

    let err = service.import_text(None, MATCH_TEXT).expect_err("no match id must fail");
    assert!(matches!(
        err.downcast_ref::<WatcherError>(),
        Some(WatcherError::NoMatchSelected)
    ));
}

#[test]
fn failed_parse_leaves_stored_state_untouched() {
    let pool = test_pool();
    let service = ImportService::new(pool.clone(), &AppConfig::new()).expect("service should build");

    service.import_text(Some(3), MATCH_TEXT).expect("first import should succeed");
    let err = service
        .import_text(Some(3), "screenshot of something else entirely")
        .expect_err("garbage must not parse");
    assert!(matches!(
        err.downcast_ref::<WatcherError>(),
        Some(WatcherError::ParseIncomplete { .. })
    ));

    let mut conn = database::get_connection(&pool).expect("connection should be available");
    let stored = observations::get_by_match(&mut conn, 3)
        .expect("load should succeed")
        .expect("first import should still be there");
    assert_eq!(stored.us.first_half.deliveries, 10);
}

#[test]
fn upserting_twice_keeps_exactly_one_row_with_the_second_payload() {
    let pool = test_pool();
    let mut conn = database::get_connection(&pool).expect("connection should be available");
    let now = chrono::Utc::now().naive_utc();

    let first = observations::upsert(&mut conn, 42, &half(4, 0), &half(2, 1), now)
        .expect("first upsert should succeed");
    let second = observations::upsert(&mut conn, 42, &half(9, 2), &half(1, 0), now)
        .expect("second upsert should succeed");

    // Same row replaced, not duplicated
    assert_eq!(first.id, second.id);
    let all = observations::list_all(&mut conn).expect("list should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].us.first_half.deliveries, 9);
    assert_eq!(all[0].us.first_half.goals, 2);
}

#[test]
fn reset_deletes_the_observation_once() {
    let pool = test_pool();
    let service = ImportService::new(pool.clone(), &AppConfig::new()).expect("service should build");

    service.import_demo(Some(5)).expect("demo import should succeed");
    assert!(service.reset(5).expect("reset should succeed"));
    assert!(!service.reset(5).expect("second reset should succeed"));

    let mut conn = database::get_connection(&pool).expect("connection should be available");
    assert!(observations::get_by_match(&mut conn, 5)
        .expect("load should succeed")
        .is_none());
}

#[test]
fn match_report_scores_both_sides_and_awards_a_verdict() {
    let pool = test_pool();
    let import = ImportService::new(pool.clone(), &AppConfig::new()).expect("service should build");
    import.import_text(Some(11), MATCH_TEXT).expect("import should succeed");

    let analytics = AnalyticsService::new(pool, AppConfig::new());
    let report = analytics
        .match_report(11)
        .expect("report should succeed")
        .expect("observation should exist");

    // us totals: 17 5 4 0 2 -> 17 + 10 + 12 + 0 + 10 = 49
    // opposition: 14 4 2 0 1 -> 14 + 8 + 6 + 0 + 5 = 33
    assert_eq!(report.us_score, 49);
    assert_eq!(report.opposition_score, 33);
    assert_eq!(report.verdict, Verdict::UsDominant);
    // 1 goal from 2 massive chances with a shot
    assert_eq!(report.us_clinicality, Some(50));
    assert_eq!(report.opposition_clinicality, Some(100));
}

#[test]
fn overlong_ocr_runs_never_reach_the_stored_record_or_the_score() {
    let pool = test_pool();
    let import = ImportService::new(pool.clone(), &AppConfig::new()).expect("service should build");

    let noisy = "\
1st Half
Us 99999999999 3 2 1 1
Them 5 1 1 0 0
2nd Half
Us 7 2 2 1 0
Them 9 3 1 1 1
";
    let saved = import.import_text(Some(8), noisy).expect("noisy text should still import");

    // The run that cannot be a counter is discarded outright, so no
    // clamped sentinel value is persisted for later sums to overflow on
    assert_eq!(saved.us.first_half.deliveries, 3);

    let analytics = AnalyticsService::new(pool, AppConfig::new());
    let report = analytics
        .match_report(8)
        .expect("report should succeed")
        .expect("observation should exist");
    // us totals: 10 4 3 0 2 -> 10 + 8 + 9 + 0 + 10 = 37
    assert_eq!(report.us_score, 37);
    assert_eq!(report.verdict, Verdict::UsDominant);
}

#[test]
fn report_for_an_unrecorded_match_is_none() {
    let analytics = AnalyticsService::new(test_pool(), AppConfig::new());
    assert!(analytics.match_report(999).expect("query should succeed").is_none());
}

#[test]
fn season_report_folds_every_stored_match() {
    let pool = test_pool();
    let mut conn = database::get_connection(&pool).expect("connection should be available");
    let now = chrono::Utc::now().naive_utc();

    observations::upsert(&mut conn, 1, &half(8, 2), &half(4, 0), now).expect("upsert");
    observations::upsert(&mut conn, 2, &half(12, 3), &half(6, 1), now).expect("upsert");
    drop(conn);

    let analytics = AnalyticsService::new(pool, AppConfig::new());
    let season = analytics.season_report().expect("season report should succeed");

    assert_eq!(season.games, 2);
    assert_eq!(season.us.totals.goals, 5);
    assert_eq!(season.us.averages.goals, 2.5);
    assert_eq!(season.goals_by_half.us_first_half, 5);
    assert_eq!(season.goals_by_half.us_second_half, 0);
}

#[test]
fn empty_store_aggregates_to_zero_without_errors() {
    let analytics = AnalyticsService::new(test_pool(), AppConfig::new());
    let season = analytics.season_report().expect("season report should succeed");

    assert_eq!(season.games, 0);
    assert_eq!(season.us.averages.goals, 0.0);
    assert_eq!(season.us.clinicality, None);
}
