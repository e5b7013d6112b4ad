/// Streak detection — current and longest win/loss runs per team.

use crate::schema::game::{GameOutcome, GameRecord, TeamId};
use crate::schema::summary::{Streak, StreakKind, StreakSummary};

/// Single chronological scan over one team's games. A tie ends the
/// active streak and starts none.
pub fn detect_streaks(team_id: TeamId, team_games: &[GameRecord]) -> StreakSummary {
    let mut current: Option<Streak> = None;
    let mut longest_win = 0u32;
    let mut longest_loss = 0u32;

    for game in team_games {
        let kind = match game.outcome() {
            GameOutcome::Win => Some(StreakKind::Winning),
            GameOutcome::Loss => Some(StreakKind::Losing),
            GameOutcome::Tie => None,
        };

        current = match (current, kind) {
            (Some(streak), Some(kind)) if streak.kind == kind => Some(Streak {
                kind,
                length: streak.length + 1,
            }),
            (_, Some(kind)) => Some(Streak { kind, length: 1 }),
            (_, None) => None,
        };

        if let Some(streak) = current {
            match streak.kind {
                StreakKind::Winning => longest_win = longest_win.max(streak.length),
                StreakKind::Losing => longest_loss = longest_loss.max(streak.length),
            }
        }
    }

    StreakSummary {
        team_id,
        current,
        longest_win,
        longest_loss,
    }
}
