/// Aggregator — pure reductions from game lists to bucket summaries.

use crate::schema::bucket::BucketLabel;
use crate::schema::game::{GameOutcome, GameRecord, TeamId};
use crate::schema::summary::BucketSummary;

/// Reduce one team's games in one bucket to its totals. Deterministic
/// and stateless; re-running over the same records yields the same
/// summary. Ties stay out of the win/loss columns but count toward
/// games and run totals.
pub fn aggregate(team_id: TeamId, bucket_label: BucketLabel, games: &[GameRecord]) -> BucketSummary {
    let mut summary = BucketSummary {
        team_id,
        bucket_label,
        games: 0,
        wins: 0,
        losses: 0,
        ties: 0,
        runs_scored: 0,
        runs_allowed: 0,
    };

    for game in games {
        summary.games += 1;
        summary.runs_scored += game.runs_for;
        summary.runs_allowed += game.runs_against;
        match game.outcome() {
            GameOutcome::Win => summary.wins += 1,
            GameOutcome::Loss => summary.losses += 1,
            GameOutcome::Tie => summary.ties += 1,
        }
    }

    summary
}

/// Season totals for one team.
pub fn season_summary(team_id: TeamId, games: &[GameRecord]) -> BucketSummary {
    aggregate(team_id, BucketLabel::Season, games)
}

/// Totals over a team's most recent `n` games (fewer when the season
/// is shorter), labeled `Recent(n)`.
pub fn recent_form(team_id: TeamId, games: &[GameRecord], n: u32) -> BucketSummary {
    let start = games.len().saturating_sub(n as usize);
    aggregate(team_id, BucketLabel::Recent(n), &games[start..])
}
