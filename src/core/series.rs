/// Series detector — consecutive same-opponent, same-venue game sets.

use crate::schema::game::{GameOutcome, GameRecord};
use crate::schema::summary::SeriesSummary;

/// Sweeps are only called on sets of at least this many games.
pub const SWEEP_MIN_GAMES: u32 = 3;
/// Default run-differential threshold for flagging a series decisive.
pub const DECISIVE_RUN_DIFF: i64 = 10;

/// Scan one team's chronologically ordered games and emit a summary per
/// series. A change of opponent starts a new series; so does a change
/// of venue framing against the same opponent, since a home set and the
/// road set of the same trip are reported as separate "vs"/"at" sets.
/// End of input closes any open series. One- and two-game sets are
/// retained; `is_sweep` stays false below three games.
pub fn detect_series(team_games: &[GameRecord], decisive_run_diff: i64) -> Vec<SeriesSummary> {
    let mut series = Vec::new();
    let mut current: Vec<GameRecord> = Vec::new();

    for game in team_games {
        if let Some(prev) = current.last() {
            if prev.opponent_id != game.opponent_id || prev.is_home != game.is_home {
                series.push(summarize(&current, decisive_run_diff));
                current.clear();
            }
        }
        current.push(*game);
    }
    if !current.is_empty() {
        series.push(summarize(&current, decisive_run_diff));
    }
    series
}

fn summarize(games: &[GameRecord], decisive_run_diff: i64) -> SeriesSummary {
    let first = &games[0];
    let last = &games[games.len() - 1];

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut ties = 0u32;
    let mut runs_scored = 0u32;
    let mut runs_allowed = 0u32;
    for game in games {
        runs_scored += game.runs_for;
        runs_allowed += game.runs_against;
        match game.outcome() {
            GameOutcome::Win => wins += 1,
            GameOutcome::Loss => losses += 1,
            GameOutcome::Tie => ties += 1,
        }
    }

    let game_count = games.len() as u32;
    let is_sweep = game_count >= SWEEP_MIN_GAMES && (wins == game_count || losses == game_count);
    let is_split = wins == losses;

    // The losing side salvages only the final game of a would-be sweep.
    let avoided_sweep = if is_sweep || game_count < 2 {
        false
    } else if wins < losses {
        wins == 1 && last.outcome() == GameOutcome::Win
    } else if losses < wins {
        losses == 1 && last.outcome() == GameOutcome::Loss
    } else {
        false
    };

    let run_diff = i64::from(runs_scored) - i64::from(runs_allowed);
    let is_decisive = !is_split && run_diff.abs() >= decisive_run_diff;

    SeriesSummary {
        team_id: first.team_id,
        opponent_id: first.opponent_id,
        is_home: first.is_home,
        start_date: first.date,
        end_date: last.date,
        game_count,
        wins,
        losses,
        ties,
        runs_scored,
        runs_allowed,
        is_sweep,
        avoided_sweep,
        is_split,
        is_decisive,
    }
}
