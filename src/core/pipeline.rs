/// The season analysis pipeline: game store → report orchestration.
///
/// Wires together grouping, aggregation, delta scoring, series and
/// streak detection, and the closure check.

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::aggregate::{aggregate, recent_form, season_summary};
use crate::core::delta::{half_run_diff_delta, rank, score, RankDirection};
use crate::core::group::{by_month, group_by, GroupedGames, HalfSplit};
use crate::core::series::{detect_series, DECISIVE_RUN_DIFF};
use crate::core::store::GameStore;
use crate::core::streak::detect_streaks;
use crate::core::validate::check_closure;
use crate::schema::bucket::{BucketLabel, Half};
use crate::schema::summary::{
    BucketSummary, ClosureReport, DeltaEntry, HalfMomentum, SeriesSummary, StreakSummary,
};

/// Conditions worth surfacing alongside a report. None of these stop
/// the analysis; downstream consumers decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisWarning {
    #[error("half-season split leaves {0:?} with no games")]
    EmptyHalf(Half),
    #[error("season totals do not close across the league")]
    UnbalancedLeague,
}

/// Everything derived from one season, deterministically ordered: team
/// id ascending, then bucket label, then date where applicable.
#[derive(Debug, Clone, Default)]
pub struct SeasonReport {
    pub season: Vec<BucketSummary>,
    pub monthly: Vec<BucketSummary>,
    pub halves: Vec<BucketSummary>,
    /// League-wide half boundary, when the season has games.
    pub midpoint: Option<NaiveDate>,
    /// "Month of Glory" — months furthest above the season line.
    pub month_glory: Vec<DeltaEntry>,
    /// "Month of Misery" — months furthest below.
    pub month_misery: Vec<DeltaEntry>,
    pub half_surges: Vec<DeltaEntry>,
    pub half_collapses: Vec<DeltaEntry>,
    pub half_momentum: Vec<HalfMomentum>,
    pub series: Vec<SeriesSummary>,
    pub streaks: Vec<StreakSummary>,
    pub recent_form: Vec<BucketSummary>,
    pub closure: ClosureReport,
    pub warnings: Vec<AnalysisWarning>,
}

/// The top-level analyzer. Built via `SeasonAnalyzer::builder()`.
#[derive(Debug, Clone)]
pub struct SeasonAnalyzer {
    min_bucket_games: u32,
    top_n: usize,
    decisive_run_diff: i64,
    recent_window: u32,
}

/// Builder for constructing a `SeasonAnalyzer`.
#[derive(Debug, Clone)]
pub struct SeasonAnalyzerBuilder {
    min_bucket_games: u32,
    top_n: usize,
    decisive_run_diff: i64,
    recent_window: u32,
}

impl Default for SeasonAnalyzer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SeasonAnalyzer {
    pub fn builder() -> SeasonAnalyzerBuilder {
        SeasonAnalyzerBuilder {
            min_bucket_games: 20,
            top_n: 10,
            decisive_run_diff: DECISIVE_RUN_DIFF,
            recent_window: 10,
        }
    }

    /// Run the full analysis over one season.
    pub fn analyze(&self, store: &GameStore) -> SeasonReport {
        let mut report = SeasonReport::default();
        let teams = store.teams();

        for &team in &teams {
            report
                .season
                .push(season_summary(team, store.games_for(team)));
        }

        report.monthly = bucket_summaries(group_by(store, by_month));
        // The month minimum keeps two-game partial months from
        // swamping the rankings; halves are season-scale already.
        report.month_glory = self.ranked_deltas(
            &report.season,
            &report.monthly,
            RankDirection::Overachievers,
            self.min_bucket_games,
        );
        report.month_misery = self.ranked_deltas(
            &report.season,
            &report.monthly,
            RankDirection::Slumps,
            self.min_bucket_games,
        );

        if let Some(split) = HalfSplit::from_store(store) {
            report.midpoint = Some(split.midpoint);
            for half in split.empty_halves(store) {
                log::warn!("half-season split leaves {:?} empty", half);
                report.warnings.push(AnalysisWarning::EmptyHalf(half));
            }

            report.halves = bucket_summaries(group_by(store, |d| split.bucket_of(d)));
            report.half_surges = self.ranked_deltas(
                &report.season,
                &report.halves,
                RankDirection::Overachievers,
                0,
            );
            report.half_collapses =
                self.ranked_deltas(&report.season, &report.halves, RankDirection::Slumps, 0);

            for half_summary in &report.halves {
                let Some(season) = season_of(&report.season, half_summary) else {
                    continue;
                };
                let BucketLabel::Half(half) = half_summary.bucket_label else {
                    continue;
                };
                report.half_momentum.push(HalfMomentum {
                    team_id: half_summary.team_id,
                    half,
                    run_diff: half_summary.run_diff(),
                    run_diff_delta_vs_season: half_run_diff_delta(season, half_summary),
                });
            }
        }

        for &team in &teams {
            let games = store.games_for(team);
            report
                .series
                .extend(detect_series(games, self.decisive_run_diff));
            report.streaks.push(detect_streaks(team, games));
            report
                .recent_form
                .push(recent_form(team, games, self.recent_window));
        }

        report.closure = check_closure(&report.season);
        if !report.closure.is_balanced() {
            report.warnings.push(AnalysisWarning::UnbalancedLeague);
        }

        report
    }

    /// Score every bucket at or above the minimum game count against
    /// its team's season line, rank, and keep the top N.
    fn ranked_deltas(
        &self,
        season: &[BucketSummary],
        buckets: &[BucketSummary],
        direction: RankDirection,
        min_games: u32,
    ) -> Vec<DeltaEntry> {
        let entries: Vec<DeltaEntry> = buckets
            .iter()
            .filter(|bucket| bucket.games >= min_games)
            .filter_map(|bucket| score(season_of(season, bucket)?, bucket))
            .collect();

        let mut ranked = rank(entries, direction);
        ranked.truncate(self.top_n);
        ranked
    }
}

fn bucket_summaries(groups: GroupedGames) -> Vec<BucketSummary> {
    let mut keys: Vec<_> = groups.keys().copied().collect();
    keys.sort();
    keys.into_iter()
        .map(|(team, label)| aggregate(team, label, &groups[&(team, label)]))
        .collect()
}

fn season_of<'a>(season: &'a [BucketSummary], bucket: &BucketSummary) -> Option<&'a BucketSummary> {
    season.iter().find(|s| s.team_id == bucket.team_id)
}

impl SeasonAnalyzerBuilder {
    /// Minimum games for a month to enter the glory/misery rankings.
    pub fn min_bucket_games(mut self, min: u32) -> Self {
        self.min_bucket_games = min;
        self
    }

    /// How many entries each ranking keeps.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Run-differential threshold for flagging a series decisive.
    pub fn decisive_run_diff(mut self, diff: i64) -> Self {
        self.decisive_run_diff = diff;
        self
    }

    /// Window for the recent-form summaries.
    pub fn recent_window(mut self, n: u32) -> Self {
        self.recent_window = n;
        self
    }

    pub fn build(self) -> SeasonAnalyzer {
        SeasonAnalyzer {
            min_bucket_games: self.min_bucket_games,
            top_n: self.top_n,
            decisive_run_diff: self.decisive_run_diff,
            recent_window: self.recent_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::game::{RawGameRow, TeamId};

    fn row(date: &str, home: u64, away: u64, home_runs: i64, away_runs: i64) -> RawGameRow {
        RawGameRow {
            date: date.to_string(),
            home_team: home,
            away_team: away,
            home_runs,
            away_runs,
        }
    }

    /// Two teams, six games across three months. Team 1 goes 4-2.
    fn small_season() -> GameStore {
        let (store, report) = GameStore::load(&[
            row("1972-04-08", 1, 2, 5, 2),
            row("1972-04-09", 1, 2, 3, 1),
            row("1972-05-10", 2, 1, 4, 2),
            row("1972-05-11", 2, 1, 1, 6),
            row("1972-06-12", 1, 2, 2, 0),
            row("1972-06-13", 1, 2, 0, 3),
        ]);
        assert!(report.skipped.is_empty());
        store
    }

    fn analyzer() -> SeasonAnalyzer {
        SeasonAnalyzer::builder().min_bucket_games(1).build()
    }

    #[test]
    fn season_totals_per_team() {
        let report = analyzer().analyze(&small_season());
        assert_eq!(report.season.len(), 2);
        let team1 = &report.season[0];
        assert_eq!(team1.team_id, TeamId(1));
        assert_eq!(team1.wins, 4);
        assert_eq!(team1.losses, 2);
    }

    #[test]
    fn monthly_partition_sums_to_season() {
        let report = analyzer().analyze(&small_season());
        for season in &report.season {
            let month_games: u32 = report
                .monthly
                .iter()
                .filter(|m| m.team_id == season.team_id)
                .map(|m| m.games)
                .sum();
            assert_eq!(month_games, season.games);
        }
    }

    #[test]
    fn glory_and_misery_are_opposite_ends() {
        let report = analyzer().analyze(&small_season());
        assert!(!report.month_glory.is_empty());
        let best = report.month_glory[0].delta;
        let worst = report.month_misery[0].delta;
        assert!(best >= worst);
    }

    #[test]
    fn min_bucket_games_filters_months() {
        let strict = SeasonAnalyzer::builder().min_bucket_games(20).build();
        let report = strict.analyze(&small_season());
        // Two-game months never qualify.
        assert!(report.month_glory.is_empty());
        // Halves ignore the month minimum.
        assert!(!report.half_surges.is_empty());
    }

    #[test]
    fn top_n_truncates() {
        let top1 = SeasonAnalyzer::builder()
            .min_bucket_games(1)
            .top_n(1)
            .build();
        let report = top1.analyze(&small_season());
        assert_eq!(report.month_glory.len(), 1);
    }

    #[test]
    fn halves_share_midpoint_and_cover_season() {
        let report = analyzer().analyze(&small_season());
        assert!(report.midpoint.is_some());
        for season in &report.season {
            let half_games: u32 = report
                .halves
                .iter()
                .filter(|h| h.team_id == season.team_id)
                .map(|h| h.games)
                .sum();
            assert_eq!(half_games, season.games);
        }
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn half_momentum_cancels_per_team() {
        let report = analyzer().analyze(&small_season());
        for &team in &[TeamId(1), TeamId(2)] {
            let total: f64 = report
                .half_momentum
                .iter()
                .filter(|m| m.team_id == team)
                .map(|m| m.run_diff_delta_vs_season)
                .sum();
            assert!(total.abs() < 1e-9);
        }
    }

    #[test]
    fn single_date_season_warns_empty_half() {
        let (store, _) = GameStore::load(&[row("1972-04-08", 1, 2, 3, 1)]);
        let report = analyzer().analyze(&store);
        assert!(report
            .warnings
            .contains(&AnalysisWarning::EmptyHalf(Half::First)));
    }

    #[test]
    fn closure_balanced_for_closed_schedule() {
        let report = analyzer().analyze(&small_season());
        assert!(report.closure.is_balanced());
        assert!(!report.warnings.contains(&AnalysisWarning::UnbalancedLeague));
    }

    #[test]
    fn empty_store_yields_empty_report() {
        let report = analyzer().analyze(&GameStore::default());
        assert!(report.season.is_empty());
        assert!(report.midpoint.is_none());
        assert!(report.series.is_empty());
        assert!(report.closure.is_balanced());
    }

    #[test]
    fn report_orderings_are_deterministic() {
        let first = analyzer().analyze(&small_season());
        let second = analyzer().analyze(&small_season());
        assert_eq!(first.monthly, second.monthly);
        assert_eq!(first.month_glory, second.month_glory);
        assert_eq!(first.series, second.series);
    }

    #[test]
    fn streaks_and_recent_form_cover_all_teams() {
        let report = analyzer().analyze(&small_season());
        assert_eq!(report.streaks.len(), 2);
        assert_eq!(report.recent_form.len(), 2);
        assert_eq!(report.recent_form[0].bucket_label, BucketLabel::Recent(10));
    }
}
