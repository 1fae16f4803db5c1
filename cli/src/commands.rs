use anyhow::{Context, Result};
use boxscore_stats::{self as stats, MatchDate, ResultCode, StatsError};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

/// Print a query result. Returns `false` when the query failed.
fn emit<T: Serialize>(
    result: Result<T, StatsError>,
    json: bool,
    text: impl FnOnce(&T) -> String,
) -> Result<bool> {
    let mut out = io::stdout().lock();
    match result {
        Ok(value) if json => {
            serde_json::to_writer_pretty(&mut out, &value).context("failed to encode result")?;
            writeln!(out)?;
            Ok(true)
        }
        Ok(value) => {
            writeln!(out, "{}", text(&value))?;
            Ok(true)
        }
        Err(e) => {
            error!("{}", e);
            let code = e.result_code();
            if json {
                let body = serde_json::json!({
                    "code": code as i32,
                    "status": code.name(),
                    "error": e.to_string(),
                });
                serde_json::to_writer_pretty(&mut out, &body).context("failed to encode error")?;
                writeln!(out)?;
            } else {
                writeln!(out, "Result: {}", code)?;
            }
            Ok(false)
        }
    }
}

fn print_file_contents(path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let mut out = io::stdout().lock();
    writeln!(out, "\n--- Contents of {} ---", path.display())?;
    write!(out, "{}", contents)?;
    writeln!(out, "--- End of file ---\n")?;
    Ok(())
}

pub fn history(input: &Path, year: i32, out: &Path, json: bool) -> Result<bool> {
    let result = stats::generate_matches_history(input, year, out);
    let ok = emit(result, json, |_| format!("Result: {}", ResultCode::Success))?;
    if ok && !json {
        print_file_contents(out)?;
    }
    Ok(ok)
}

pub fn mvp(input: &Path, year: i32, month: i32, day: i32, json: bool) -> Result<bool> {
    let result = stats::find_match_mvp(input, MatchDate::new(year, month, day));
    emit(result, json, |mvp| {
        format!("MVP Combined Score: {:.2} ({}, {})", mvp.combined_score, mvp.player, mvp.team)
    })
}

pub fn average(input: &Path, player: &str, json: bool) -> Result<bool> {
    let result = stats::average_points_player(input, player);
    emit(result, json, |avg| format!("Average Points: {:.2}", avg))
}

pub fn best_win(input: &Path, year: i32, month: i32, json: bool) -> Result<bool> {
    let result = stats::find_best_winning_match(input, year, month);
    emit(result, json, |m| format!("Best Winning Match Score: {}", m.home_score))
}

pub fn best_month(input: &Path, json: bool) -> Result<bool> {
    let result = stats::find_best_month(input);
    emit(result, json, |b| format!("Best Month: {}", b.month))
}

pub fn report(input: &Path, player: &str, out: &Path, json: bool) -> Result<bool> {
    let result = stats::generate_player_report(input, player, out);
    let ok = emit(result, json, |_| format!("Result: {}", ResultCode::Success))?;
    if ok && !json {
        print_file_contents(out)?;
    }
    Ok(ok)
}

/// Walk through every query, including the three failure cases.
pub fn demo(input: &Path, out_dir: &Path) -> Result<()> {
    info!("Running demo against {}", input.display());
    let history_out = out_dir.join("history_2024.txt");
    let report_out = out_dir.join("edey_report.txt");

    println!("=== generate_matches_history (2024) ===");
    history(input, 2024, &history_out, false)?;

    println!("=== match_most_valuable_player (2024-01-10) ===");
    println!("Formula: points + 1.5*assists + 2*blocks + 0.2*minutes");
    mvp(input, 2024, 1, 10, false)?;

    println!("\n=== average_points_player (Z. Edey) ===");
    average(input, "Z. Edey", false)?;

    println!("\n=== purdue_best_winning_match_score (2024-01) ===");
    best_win(input, 2024, 1, false)?;

    println!("\n=== purdue_best_month ===");
    best_month(input, false)?;

    println!("\n=== generate_player_report (Z. Edey) ===");
    report(input, "Z. Edey", &report_out, false)?;

    println!("=== error handling: file not found ===");
    history(&out_dir.join("nonexistent.txt"), 2024, &out_dir.join("output.txt"), false)?;

    println!("\n=== error handling: invalid date (month 13) ===");
    mvp(input, 2024, 13, 1, false)?;

    println!("\n=== error handling: player not found ===");
    average(input, "J. Doe", false)?;

    Ok(())
}
