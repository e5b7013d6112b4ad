/// Schedule Linter — validates a season game file before analysis.
///
/// Usage: schedule_linter <games.ron>
///
/// Reports rows the loader would skip, teams with no games in one half,
/// and whether the league totals close for a round-robin schedule.

use season_splits::core::group::HalfSplit;
use season_splits::core::pipeline::{AnalysisWarning, SeasonAnalyzer};
use season_splits::core::store::GameStore;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: schedule_linter <games.ron>");
        process::exit(0);
    }

    let games_path = Path::new(&args[1]);
    let (store, load_report) = match GameStore::load_from_ron(games_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("ERROR: Failed to load game file: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded {} games across {} teams",
        load_report.games_loaded,
        store.teams().len()
    );

    let mut errors = 0usize;
    let mut warnings = 0usize;

    println!("\n=== Schedule Lint Report ===\n");

    for skipped in &load_report.skipped {
        errors += 1;
        println!("ERROR: row {}: {}", skipped.index, skipped.reason);
    }

    if let Some(split) = HalfSplit::from_store(&store) {
        println!("Half boundary: {}", split.midpoint);
        for team in store.teams() {
            let games = store.games_for(team);
            let first = games.iter().filter(|g| g.date < split.midpoint).count();
            let second = games.len() - first;
            if first == 0 || second == 0 {
                warnings += 1;
                println!(
                    "WARNING: team {} has an empty half ({} H1 / {} H2 games)",
                    team.0, first, second
                );
            }
        }
    }

    let report = SeasonAnalyzer::default().analyze(&store);
    for warning in &report.warnings {
        warnings += 1;
        println!("WARNING: {}", warning);
    }
    if !report
        .warnings
        .contains(&AnalysisWarning::UnbalancedLeague)
    {
        println!(
            "Closure: {} wins / {} losses, run_diff sum {}",
            report.closure.total_wins, report.closure.total_losses, report.closure.total_run_diff
        );
    }

    if errors == 0 && warnings == 0 {
        println!("All checks passed!");
    }
    println!("\nSummary: {} errors, {} warnings", errors, warnings);

    if errors > 0 {
        process::exit(1);
    }
}
