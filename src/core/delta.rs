/// Delta scorer — bucket performance measured against the season line.

use crate::schema::summary::{BucketSummary, DeltaEntry};

/// Which end of the delta ranking a report wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Largest positive delta first ("Month of Glory").
    Overachievers,
    /// Largest negative delta first ("Month of Misery").
    Slumps,
}

/// Score one bucket against the team's season summary. `None` when
/// either side has no decisions — empty buckets never rank.
pub fn score(season: &BucketSummary, bucket: &BucketSummary) -> Option<DeltaEntry> {
    debug_assert_eq!(season.team_id, bucket.team_id);
    let season_win_pct = season.win_pct()?;
    let bucket_win_pct = bucket.win_pct()?;
    Some(DeltaEntry {
        team_id: bucket.team_id,
        bucket_label: bucket.bucket_label,
        bucket_win_pct,
        season_win_pct,
        delta: bucket_win_pct - season_win_pct,
    })
}

/// Sort entries by delta in the requested direction. Equal deltas are
/// common in league data, so ties break by bucket label ascending then
/// team id ascending to keep output reproducible.
pub fn rank(mut entries: Vec<DeltaEntry>, direction: RankDirection) -> Vec<DeltaEntry> {
    entries.sort_by(|a, b| {
        let by_delta = match direction {
            RankDirection::Overachievers => b.delta.total_cmp(&a.delta),
            RankDirection::Slumps => a.delta.total_cmp(&b.delta),
        };
        by_delta
            .then_with(|| a.bucket_label.cmp(&b.bucket_label))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    entries
}

/// Half run-differential momentum: the half's run_diff minus half the
/// season figure. Zero means the half carried its share.
pub fn half_run_diff_delta(season: &BucketSummary, half: &BucketSummary) -> f64 {
    half.run_diff() as f64 - season.run_diff() as f64 / 2.0
}
