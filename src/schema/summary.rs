use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bucket::{BucketLabel, Half};
use super::game::TeamId;

/// Win/loss/run totals for one team within one time bucket.
///
/// Derived, never persisted — recomputed from the game store per
/// request. `win_pct` is `None` when the bucket holds no decisions,
/// which keeps empty buckets out of downstream rankings instead of
/// showing up as a false 0.000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub team_id: TeamId,
    pub bucket_label: BucketLabel,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
}

impl BucketSummary {
    /// Games with a decision. Ties play no part here.
    pub fn decisions(&self) -> u32 {
        self.wins + self.losses
    }

    /// wins / (wins + losses), or `None` when the bucket has no
    /// decisions.
    pub fn win_pct(&self) -> Option<f64> {
        let decisions = self.decisions();
        if decisions == 0 {
            None
        } else {
            Some(f64::from(self.wins) / f64::from(decisions))
        }
    }

    pub fn run_diff(&self) -> i64 {
        i64::from(self.runs_scored) - i64::from(self.runs_allowed)
    }
}

/// A bucket's win percentage measured against the team's season-long
/// figure. Produced only when both sides are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaEntry {
    pub team_id: TeamId,
    pub bucket_label: BucketLabel,
    pub bucket_win_pct: f64,
    pub season_win_pct: f64,
    /// bucket_win_pct − season_win_pct; positive means overperformance.
    pub delta: f64,
}

/// Half-season run-differential momentum: how far a team's half
/// run_diff sits from half its season figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfMomentum {
    pub team_id: TeamId,
    pub half: Half,
    pub run_diff: i64,
    pub run_diff_delta_vs_season: f64,
}

/// A maximal run of consecutive games for one team against one
/// opponent under one venue framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub is_home: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub game_count: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    /// Every decision went one way, in a set of 3+ games.
    pub is_sweep: bool,
    /// The losing side took only the final game of a would-be sweep.
    pub avoided_sweep: bool,
    /// Equal wins and losses.
    pub is_split: bool,
    /// Run differential at or beyond the decisive threshold.
    pub is_decisive: bool,
}

impl SeriesSummary {
    pub fn run_diff(&self) -> i64 {
        i64::from(self.runs_scored) - i64::from(self.runs_allowed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreakKind {
    Winning,
    Losing,
}

/// A run of consecutive same-outcome decisions. Ties end a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub length: u32,
}

impl Streak {
    /// Standings-column form: "W5", "L3".
    pub fn label(&self) -> String {
        match self.kind {
            StreakKind::Winning => format!("W{}", self.length),
            StreakKind::Losing => format!("L{}", self.length),
        }
    }
}

/// Current and longest streaks for one team across a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub team_id: TeamId,
    pub current: Option<Streak>,
    pub longest_win: u32,
    pub longest_loss: u32,
}

/// League-wide totals for the closed-schedule sanity check: in a full
/// round-robin every win is someone's loss and every run scored is
/// someone's run allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureReport {
    pub total_wins: u64,
    pub total_losses: u64,
    pub total_run_diff: i64,
}

impl ClosureReport {
    pub fn is_balanced(&self) -> bool {
        self.total_wins == self.total_losses && self.total_run_diff == 0
    }
}
