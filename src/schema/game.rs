use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Newtype wrapper for team IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u64);

/// How a single game went from one team's perspective.
///
/// Tied games exist in the exported data — extra-inning resolution is
/// not modeled — and stay out of win/loss counts while still
/// contributing to run totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl GameOutcome {
    /// Returns the short label for this outcome ("W", "L", "T").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Tie => "T",
        }
    }
}

/// One game from one team's perspective. Every real game yields two of
/// these: the home record and the away record, with team/opponent and
/// runs_for/runs_against swapped and the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub runs_for: u32,
    pub runs_against: u32,
    pub is_home: bool,
}

impl GameRecord {
    pub fn outcome(&self) -> GameOutcome {
        if self.runs_for > self.runs_against {
            GameOutcome::Win
        } else if self.runs_for < self.runs_against {
            GameOutcome::Loss
        } else {
            GameOutcome::Tie
        }
    }

    /// "vs" for home games, "at" for road games — the framing the
    /// report layer uses for series headlines.
    pub fn venue_framing(&self) -> &'static str {
        if self.is_home {
            "vs"
        } else {
            "at"
        }
    }
}

/// One raw result row as handed over by the export step, one per real
/// game. Dates arrive as strings and runs as signed integers; both are
/// validated at the ingestion boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGameRow {
    pub date: String,
    pub home_team: u64,
    pub away_team: u64,
    pub home_runs: i64,
    pub away_runs: i64,
}
