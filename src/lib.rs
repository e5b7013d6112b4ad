//! Season Splits — split statistics for simulated baseball seasons.
//!
//! Turns one season of per-game team results into the derived figures
//! that feed downstream report generation: season and calendar-month
//! totals, half-season splits with delta-vs-season scoring, series
//! summaries with sweep detection, and win/loss streak tracking.

pub mod core;
pub mod schema;
