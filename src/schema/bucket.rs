use serde::{Deserialize, Serialize};

/// One half of a season, split at the league-wide midpoint date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
}

impl Half {
    /// Returns the short label for this half ("H1", "H2").
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "H1",
            Self::Second => "H2",
        }
    }
}

/// A named subset of a team's games grouped by a time criterion.
///
/// The derived `Ord` gives rankings a fully specified tie-break order;
/// equal-delta entries sort by label before team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BucketLabel {
    /// The whole season.
    Season,
    /// A calendar month, 1..=12.
    Month(u32),
    Half(Half),
    /// The most recent N games.
    Recent(u32),
}

impl BucketLabel {
    /// Display name: "season", the calendar month name, "H1"/"H2",
    /// or "last-N".
    pub fn name(&self) -> String {
        match self {
            Self::Season => "season".to_string(),
            Self::Month(m) => month_name(*m).to_string(),
            Self::Half(h) => h.label().to_string(),
            Self::Recent(n) => format!("last-{}", n),
        }
    }
}

impl std::fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Calendar month name for 1..=12; "unknown" outside that range.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "unknown",
    }
}
