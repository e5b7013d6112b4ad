/// Preview — render a season report from a RON game file.
///
/// Usage: preview --games <path> [--min-games <n>] [--top <n>]
///                [--decisive <n>] [--recent <n>]
///
/// Prints the season standings, Month of Glory/Misery rankings, half
/// splits, sweeps, and streaks for a quick look at a season without
/// the downstream report tooling.

use season_splits::core::pipeline::SeasonAnalyzer;
use season_splits::core::store::GameStore;
use season_splits::schema::summary::BucketSummary;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut games_path = None;
    let mut min_games: u32 = 20;
    let mut top_n: usize = 10;
    let mut decisive: i64 = 10;
    let mut recent: u32 = 10;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" if i + 1 < args.len() => {
                i += 1;
                games_path = Some(args[i].clone());
            }
            "--min-games" if i + 1 < args.len() => {
                i += 1;
                min_games = args[i].parse().unwrap_or(20);
            }
            "--top" if i + 1 < args.len() => {
                i += 1;
                top_n = args[i].parse().unwrap_or(10);
            }
            "--decisive" if i + 1 < args.len() => {
                i += 1;
                decisive = args[i].parse().unwrap_or(10);
            }
            "--recent" if i + 1 < args.len() => {
                i += 1;
                recent = args[i].parse().unwrap_or(10);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(games_path) = games_path else {
        eprintln!("Missing --games <path>");
        print_usage();
        std::process::exit(1);
    };

    let (store, load_report) = match GameStore::load_from_ron(Path::new(&games_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("ERROR loading {}: {}", games_path, e);
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} games ({} rows skipped)",
        load_report.games_loaded,
        load_report.skipped.len()
    );

    let analyzer = SeasonAnalyzer::builder()
        .min_bucket_games(min_games)
        .top_n(top_n)
        .decisive_run_diff(decisive)
        .recent_window(recent)
        .build();
    let report = analyzer.analyze(&store);

    println!("\n=== Season Standings ===");
    for s in &report.season {
        println!(
            "  team {:>3}: {:>3}-{:<3} ({}) run_diff={:+}",
            s.team_id.0,
            s.wins,
            s.losses,
            pct(s),
            s.run_diff()
        );
    }

    println!("\n=== Month of Glory (G >= {}) ===", min_games);
    for e in &report.month_glory {
        println!(
            "  team {:>3} - {}: {:.3} (season {:.3}), delta vs season={:+.3}",
            e.team_id.0,
            e.bucket_label,
            e.bucket_win_pct,
            e.season_win_pct,
            e.delta
        );
    }

    println!("\n=== Month of Misery (G >= {}) ===", min_games);
    for e in &report.month_misery {
        println!(
            "  team {:>3} - {}: {:.3} (season {:.3}), delta vs season={:+.3}",
            e.team_id.0,
            e.bucket_label,
            e.bucket_win_pct,
            e.season_win_pct,
            e.delta
        );
    }

    if let Some(midpoint) = report.midpoint {
        println!("\n=== Half Splits (midpoint {}) ===", midpoint);
        for h in &report.halves {
            println!(
                "  team {:>3} {}: {:>3}-{:<3} ({}) run_diff={:+}",
                h.team_id.0,
                h.bucket_label,
                h.wins,
                h.losses,
                pct(h),
                h.run_diff()
            );
        }
    }

    println!("\n=== Sweeps and Decisive Series ===");
    for s in report.series.iter().filter(|s| s.is_sweep || s.is_decisive) {
        let framing = if s.is_home { "vs" } else { "at" };
        let mut flags = Vec::new();
        if s.is_sweep {
            flags.push("SWEEP");
        }
        if s.is_decisive {
            flags.push("decisive");
        }
        println!(
            "  team {:>3} {} team {}: {}-{} over {} games ({} to {}), run_diff={:+} [{}]",
            s.team_id.0,
            framing,
            s.opponent_id.0,
            s.wins,
            s.losses,
            s.game_count,
            s.start_date,
            s.end_date,
            s.run_diff(),
            flags.join(", ")
        );
    }

    println!("\n=== Streaks ===");
    for s in &report.streaks {
        let current = s
            .current
            .map(|streak| streak.label())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  team {:>3}: current {} (longest W{} / L{})",
            s.team_id.0, current, s.longest_win, s.longest_loss
        );
    }

    println!("\n=== Recent Form ===");
    for s in &report.recent_form {
        println!(
            "  team {:>3} {}: {}-{} ({})",
            s.team_id.0,
            s.bucket_label,
            s.wins,
            s.losses,
            pct(s)
        );
    }

    if !report.warnings.is_empty() {
        println!("\n=== Warnings ===");
        for w in &report.warnings {
            println!("  {}", w);
        }
    }
}

fn pct(summary: &BucketSummary) -> String {
    match summary.win_pct() {
        Some(p) => format!("{:.3}", p),
        None => "N/A".to_string(),
    }
}

fn print_usage() {
    println!("Preview — render a season report from a RON game file.");
    println!();
    println!("Usage: preview --games <path> [--min-games <n>] [--top <n>] [--decisive <n>] [--recent <n>]");
    println!();
    println!("  --games <path>    Path to a RON file of raw game rows");
    println!("  --min-games <n>   Minimum games for month rankings (default: 20)");
    println!("  --top <n>         Entries kept per ranking (default: 10)");
    println!("  --decisive <n>    Decisive series run-diff threshold (default: 10)");
    println!("  --recent <n>      Recent-form window (default: 10)");
}
