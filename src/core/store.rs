/// Game record store — validated season ingestion and per-team access.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::game::{GameRecord, RawGameRow, TeamId};

/// Date formats accepted at the ingestion boundary. The export step
/// writes ISO dates; older season archives use the US form.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unparsable date '{0}'")]
    MalformedDate(String),
    #[error("negative run total {runs} for team {team}")]
    NegativeRuns { team: u64, runs: i64 },
    #[error("home and away team are both {0}")]
    SelfOpponent(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A raw row that failed validation: its position in the input and the
/// reason it was dropped.
#[derive(Debug)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: StoreError,
}

/// Outcome of a season load. Malformed rows are skipped and reported
/// here, never fatal to the whole load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub games_loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

/// An in-memory season of game records, grouped by team and pre-sorted
/// by date ascending. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    by_team: FxHashMap<TeamId, Vec<GameRecord>>,
    /// Every record's date (both perspectives), sorted ascending.
    dates: Vec<NaiveDate>,
}

impl GameStore {
    /// Load a season from raw result rows. Each well-formed row becomes
    /// two perspective records, one per team.
    pub fn load(rows: &[RawGameRow]) -> (GameStore, LoadReport) {
        let mut store = GameStore::default();
        let mut report = LoadReport::default();

        for (index, row) in rows.iter().enumerate() {
            match validate_row(row) {
                Ok((date, home, away)) => {
                    store.insert_game(date, row, home, away);
                    report.games_loaded += 1;
                }
                Err(reason) => {
                    log::warn!("skipping row {}: {}", index, reason);
                    report.skipped.push(SkippedRow { index, reason });
                }
            }
        }

        for games in store.by_team.values_mut() {
            games.sort_by_key(|g| g.date);
        }
        store.dates.sort();

        log::debug!(
            "loaded {} games ({} rows skipped) for {} teams",
            report.games_loaded,
            report.skipped.len(),
            store.by_team.len()
        );
        (store, report)
    }

    /// Load a season from a RON file holding a list of raw rows.
    /// Fixture and preview data only — production ingestion stays with
    /// the export pipeline.
    pub fn load_from_ron(path: &Path) -> Result<(GameStore, LoadReport), StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let rows: Vec<RawGameRow> = ron::from_str(&contents)?;
        Ok(Self::load(&rows))
    }

    fn insert_game(&mut self, date: NaiveDate, row: &RawGameRow, home_runs: u32, away_runs: u32) {
        let home = TeamId(row.home_team);
        let away = TeamId(row.away_team);

        self.by_team.entry(home).or_default().push(GameRecord {
            date,
            team_id: home,
            opponent_id: away,
            runs_for: home_runs,
            runs_against: away_runs,
            is_home: true,
        });
        self.by_team.entry(away).or_default().push(GameRecord {
            date,
            team_id: away,
            opponent_id: home,
            runs_for: away_runs,
            runs_against: home_runs,
            is_home: false,
        });
        self.dates.push(date);
        self.dates.push(date);
    }

    /// All team IDs in the season, sorted ascending.
    pub fn teams(&self) -> Vec<TeamId> {
        let mut teams: Vec<TeamId> = self.by_team.keys().copied().collect();
        teams.sort();
        teams
    }

    /// One team's games, date ascending. Empty for unknown teams.
    pub fn games_for(&self, team: TeamId) -> &[GameRecord] {
        self.by_team.get(&team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every record's date (two per real game), sorted ascending. This
    /// is the sequence the half-season midpoint is taken from.
    pub fn all_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Total perspective records across the season.
    pub fn record_count(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

fn validate_row(row: &RawGameRow) -> Result<(NaiveDate, u32, u32), StoreError> {
    let date = parse_date(&row.date)?;
    if row.home_team == row.away_team {
        return Err(StoreError::SelfOpponent(row.home_team));
    }
    let home = check_runs(row.home_team, row.home_runs)?;
    let away = check_runs(row.away_team, row.away_runs)?;
    Ok((date, home, away))
}

fn parse_date(text: &str) -> Result<NaiveDate, StoreError> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }
    Err(StoreError::MalformedDate(text.to_string()))
}

fn check_runs(team: u64, runs: i64) -> Result<u32, StoreError> {
    u32::try_from(runs).map_err(|_| StoreError::NegativeRuns { team, runs })
}
