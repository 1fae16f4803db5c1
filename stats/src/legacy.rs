//! Sentinel-returning wrappers for callers that still expect the old numeric
//! result channel: `0` on success, a negative `ResultCode` on failure, or the
//! statistic itself when it is non-negative.

use crate::types::{ResultCode, StatsError};
use crate::MatchDate;
use std::path::Path;

fn status<T>(result: Result<T, StatsError>) -> i32 {
    ResultCode::from(&result) as i32
}

fn or_code_f64(result: Result<f64, StatsError>) -> f64 {
    result.unwrap_or_else(|e| f64::from(e.code()))
}

fn or_code_i32<T: TryInto<i32>>(result: Result<T, StatsError>) -> i32 {
    match result {
        Ok(value) => value.try_into().unwrap_or(i32::MAX),
        Err(e) => e.code(),
    }
}

pub fn generate_matches_history(
    in_file: impl AsRef<Path>,
    year: i32,
    out_file: impl AsRef<Path>,
) -> i32 {
    status(crate::generate_matches_history(in_file, year, out_file))
}

pub fn match_most_valuable_player(
    in_file: impl AsRef<Path>,
    year: i32,
    month: i32,
    day: i32,
) -> f64 {
    let date = MatchDate::new(year, month, day);
    or_code_f64(crate::find_match_mvp(in_file, date).map(|m| m.combined_score))
}

pub fn average_points_player(in_file: impl AsRef<Path>, player: &str) -> f64 {
    or_code_f64(crate::average_points_player(in_file, player))
}

pub fn purdue_best_winning_match_score(
    in_file: impl AsRef<Path>,
    year: i32,
    month: i32,
) -> i32 {
    or_code_i32(crate::best_winning_match_score(in_file, year, month))
}

pub fn purdue_best_month(in_file: impl AsRef<Path>) -> i32 {
    or_code_i32(crate::best_month(in_file))
}

pub fn generate_player_report(
    in_file: impl AsRef<Path>,
    player: &str,
    out_file: impl AsRef<Path>,
) -> i32 {
    status(crate::generate_player_report(in_file, player, out_file))
}
