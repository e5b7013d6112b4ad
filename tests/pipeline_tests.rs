/// Pipeline integration tests — end-to-end season analysis over the
/// fixture season.

use season_splits::core::pipeline::{AnalysisWarning, SeasonAnalyzer};
use season_splits::core::store::GameStore;
use season_splits::schema::bucket::{BucketLabel, Half};
use season_splits::schema::game::TeamId;
use season_splits::schema::summary::{BucketSummary, StreakKind};
use std::path::Path;

fn fixture_store() -> GameStore {
    let path = Path::new("tests/fixtures/season_1972.ron");
    let (store, report) = GameStore::load_from_ron(path).unwrap();
    assert_eq!(report.games_loaded, 18);
    assert!(report.skipped.is_empty());
    store
}

fn analyze() -> season_splits::core::pipeline::SeasonReport {
    SeasonAnalyzer::builder()
        .min_bucket_games(1)
        .build()
        .analyze(&fixture_store())
}

fn season_for(report: &[BucketSummary], team: u64) -> &BucketSummary {
    report
        .iter()
        .find(|s| s.team_id == TeamId(team))
        .expect("missing team summary")
}

#[test]
fn season_totals_match_hand_counts() {
    let report = analyze();

    let team1 = season_for(&report.season, 1);
    assert_eq!((team1.wins, team1.losses, team1.ties), (6, 3, 0));
    assert_eq!(team1.run_diff(), 2);

    let team2 = season_for(&report.season, 2);
    assert_eq!((team2.wins, team2.losses, team2.ties), (2, 7, 1));
    assert_eq!(team2.run_diff(), -12);

    let team3 = season_for(&report.season, 3);
    assert_eq!((team3.wins, team3.losses, team3.ties), (4, 4, 0));
    assert_eq!(team3.run_diff(), -1);

    let team4 = season_for(&report.season, 4);
    assert_eq!((team4.wins, team4.losses, team4.ties), (5, 3, 1));
    assert_eq!(team4.run_diff(), 11);
}

#[test]
fn league_closes() {
    let report = analyze();
    assert_eq!(report.closure.total_wins, 17);
    assert_eq!(report.closure.total_losses, 17);
    assert_eq!(report.closure.total_run_diff, 0);
    assert!(report.closure.is_balanced());
    assert!(report.warnings.is_empty());
}

#[test]
fn midpoint_is_upper_median_date() {
    let report = analyze();
    assert_eq!(report.midpoint.unwrap().to_string(), "1972-05-05");
}

#[test]
fn team1_first_half_outpaces_second() {
    let report = analyze();
    let h1 = report
        .halves
        .iter()
        .find(|h| h.team_id == TeamId(1) && h.bucket_label == BucketLabel::Half(Half::First))
        .unwrap();
    let h2 = report
        .halves
        .iter()
        .find(|h| h.team_id == TeamId(1) && h.bucket_label == BucketLabel::Half(Half::Second))
        .unwrap();
    assert_eq!((h1.wins, h1.losses), (4, 1));
    assert_eq!((h2.wins, h2.losses), (2, 2));
    assert_eq!(h1.games + h2.games, 9);
}

#[test]
fn opening_sweep_detected() {
    let report = analyze();
    let sweep = report
        .series
        .iter()
        .find(|s| s.team_id == TeamId(1) && s.is_sweep)
        .expect("team 1 should have a sweep");
    assert_eq!(sweep.opponent_id, TeamId(2));
    assert!(sweep.is_home);
    assert_eq!(sweep.game_count, 3);
    assert_eq!((sweep.wins, sweep.losses), (3, 0));
    assert_eq!(sweep.start_date.to_string(), "1972-04-10");
    assert_eq!(sweep.end_date.to_string(), "1972-04-12");
}

#[test]
fn june_rout_is_decisive_both_ways() {
    let report = analyze();
    let rout = report
        .series
        .iter()
        .find(|s| s.team_id == TeamId(4) && s.opponent_id == TeamId(1) && !s.is_home)
        .unwrap();
    assert_eq!(rout.run_diff(), 14);
    assert!(rout.is_decisive);
    // Two games only, so no sweep call.
    assert!(!rout.is_sweep);

    let mirror = report
        .series
        .iter()
        .find(|s| s.team_id == TeamId(1) && s.opponent_id == TeamId(4) && s.is_home)
        .unwrap();
    assert_eq!(mirror.run_diff(), -14);
    assert!(mirror.is_decisive);
}

#[test]
fn series_run_diffs_sum_to_season() {
    let report = analyze();
    for season in &report.season {
        let series_diff: i64 = report
            .series
            .iter()
            .filter(|s| s.team_id == season.team_id)
            .map(|s| s.run_diff())
            .sum();
        assert_eq!(series_diff, season.run_diff());

        let series_games: u32 = report
            .series
            .iter()
            .filter(|s| s.team_id == season.team_id)
            .map(|s| s.game_count)
            .sum();
        assert_eq!(series_games, season.games);
    }
}

#[test]
fn all_tie_month_stays_out_of_rankings() {
    // Team 2's only May game is the 6-6 tie: no decisions, no delta.
    let report = analyze();
    let may_team2 = report
        .monthly
        .iter()
        .find(|m| m.team_id == TeamId(2) && m.bucket_label == BucketLabel::Month(5))
        .unwrap();
    assert_eq!(may_team2.games, 1);
    assert_eq!(may_team2.win_pct(), None);

    let in_glory = report
        .month_glory
        .iter()
        .chain(&report.month_misery)
        .any(|e| e.team_id == TeamId(2) && e.bucket_label == BucketLabel::Month(5));
    assert!(!in_glory);
}

#[test]
fn month_buckets_sum_to_season() {
    let report = analyze();
    for season in &report.season {
        let months: Vec<_> = report
            .monthly
            .iter()
            .filter(|m| m.team_id == season.team_id)
            .collect();
        assert_eq!(months.iter().map(|m| m.games).sum::<u32>(), season.games);
        assert_eq!(months.iter().map(|m| m.wins).sum::<u32>(), season.wins);
        assert_eq!(months.iter().map(|m| m.losses).sum::<u32>(), season.losses);
        assert_eq!(months.iter().map(|m| m.ties).sum::<u32>(), season.ties);
    }
}

#[test]
fn team1_streaks() {
    let report = analyze();
    let streaks = report
        .streaks
        .iter()
        .find(|s| s.team_id == TeamId(1))
        .unwrap();
    // W W W L W W W L L
    assert_eq!(streaks.longest_win, 3);
    assert_eq!(streaks.longest_loss, 2);
    let current = streaks.current.unwrap();
    assert_eq!(current.kind, StreakKind::Losing);
    assert_eq!(current.length, 2);
}

#[test]
fn recent_form_windows_the_tail() {
    let report = SeasonAnalyzer::builder()
        .min_bucket_games(1)
        .recent_window(4)
        .build()
        .analyze(&fixture_store());
    let recent = report
        .recent_form
        .iter()
        .find(|s| s.team_id == TeamId(1))
        .unwrap();
    assert_eq!(recent.bucket_label, BucketLabel::Recent(4));
    assert_eq!(recent.games, 4);
    // Team 1's tail: 5/10 W, 5/11 W, 6/1 L, 6/2 L.
    assert_eq!((recent.wins, recent.losses), (2, 2));
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = SeasonAnalyzer::builder().min_bucket_games(1).build();
    let store = fixture_store();
    let first = analyzer.analyze(&store);
    let second = analyzer.analyze(&store);
    assert_eq!(first.season, second.season);
    assert_eq!(first.monthly, second.monthly);
    assert_eq!(first.halves, second.halves);
    assert_eq!(first.month_glory, second.month_glory);
    assert_eq!(first.series, second.series);
    assert_eq!(first.streaks, second.streaks);
}

#[test]
fn warnings_do_not_fire_on_well_formed_season() {
    let report = analyze();
    assert!(!report.warnings.contains(&AnalysisWarning::UnbalancedLeague));
    assert!(!report
        .warnings
        .iter()
        .any(|w| matches!(w, AnalysisWarning::EmptyHalf(_))));
}
