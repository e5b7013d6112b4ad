/// Grouping engine — team × time-bucket partitions of a season.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;

use crate::core::store::GameStore;
use crate::schema::bucket::{BucketLabel, Half};
use crate::schema::game::{GameRecord, TeamId};

/// A mapping from (team, bucket) to that team's games in the bucket,
/// chronological order preserved.
pub type GroupedGames = FxHashMap<(TeamId, BucketLabel), Vec<GameRecord>>;

/// Partition the store by team and bucketing function. Every game lands
/// in exactly one bucket, so per-team bucket totals sum to the season.
pub fn group_by<F>(store: &GameStore, bucket_of: F) -> GroupedGames
where
    F: Fn(NaiveDate) -> BucketLabel,
{
    let mut groups: GroupedGames = FxHashMap::default();
    for team in store.teams() {
        for game in store.games_for(team) {
            groups
                .entry((team, bucket_of(game.date)))
                .or_default()
                .push(*game);
        }
    }
    groups
}

/// Calendar-month bucketing.
pub fn by_month(date: NaiveDate) -> BucketLabel {
    BucketLabel::Month(date.month())
}

/// The league-wide half-season boundary, determined once per season
/// from the full sorted date sequence so every team shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfSplit {
    pub midpoint: NaiveDate,
}

impl HalfSplit {
    /// Upper median of the store's date sequence. `None` for an empty
    /// season.
    pub fn from_store(store: &GameStore) -> Option<HalfSplit> {
        let dates = store.all_dates();
        if dates.is_empty() {
            return None;
        }
        Some(HalfSplit {
            midpoint: dates[dates.len() / 2],
        })
    }

    /// Games strictly before the midpoint are H1; on/after are H2.
    pub fn classify(&self, date: NaiveDate) -> Half {
        if date < self.midpoint {
            Half::First
        } else {
            Half::Second
        }
    }

    pub fn bucket_of(&self, date: NaiveDate) -> BucketLabel {
        BucketLabel::Half(self.classify(date))
    }

    /// Halves holding no games league-wide. Non-empty output means the
    /// boundary is degenerate (e.g. every game on a single date) and
    /// half figures would mislead.
    pub fn empty_halves(&self, store: &GameStore) -> Vec<Half> {
        let mut first = 0usize;
        let mut second = 0usize;
        for &date in store.all_dates() {
            match self.classify(date) {
                Half::First => first += 1,
                Half::Second => second += 1,
            }
        }
        let mut empty = Vec::new();
        if first == 0 && !store.is_empty() {
            empty.push(Half::First);
        }
        if second == 0 && !store.is_empty() {
            empty.push(Half::Second);
        }
        empty
    }
}
