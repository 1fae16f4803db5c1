use crate::match_fold::{scan, Reducer};
use crate::output::{create_output, write_output};
use crate::scanner::RecordScanner;
use crate::types::{MatchSummary, Record, StatsError};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Season totals for one home-team player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub player: String,
    pub games: u32,
    pub games_won: u32,
    pub total_points: u64,
    pub total_assists: u64,
    pub total_blocks: u64,
    pub total_minutes: f64,
}

impl PlayerReport {
    fn per_game(&self, total: f64) -> f64 {
        total / f64::from(self.games)
    }

    pub fn points_per_game(&self) -> f64 {
        self.per_game(self.total_points as f64)
    }

    pub fn assists_per_game(&self) -> f64 {
        self.per_game(self.total_assists as f64)
    }

    pub fn blocks_per_game(&self) -> f64 {
        self.per_game(self.total_blocks as f64)
    }

    pub fn average_minutes(&self) -> f64 {
        self.per_game(self.total_minutes)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Player: {}", self.player);
        let _ = writeln!(out, "Games: {}", self.games);
        let _ = writeln!(out, "Games Won: {}", self.games_won);
        let _ = writeln!(out, "Points per Game: {:.2}", self.points_per_game());
        let _ = writeln!(out, "Assists per Game: {:.2}", self.assists_per_game());
        let _ = writeln!(out, "Blocks per Game: {:.2}", self.blocks_per_game());
        let _ = writeln!(out, "Average Minutes: {:.2}", self.average_minutes());
        out
    }
}

/// Tracks every match (both sides are needed to call a win) but only
/// accumulates stats from the player's own home-team rows.
struct ReportReducer {
    report: PlayerReport,
    in_current_match: bool,
}

impl ReportReducer {
    fn new(player: &str) -> Self {
        Self {
            report: PlayerReport {
                player: player.to_string(),
                games: 0,
                games_won: 0,
                total_points: 0,
                total_assists: 0,
                total_blocks: 0,
                total_minutes: 0.0,
            },
            in_current_match: false,
        }
    }
}

impl Reducer for ReportReducer {
    type Output = PlayerReport;

    fn name(&self) -> &'static str {
        "player-report"
    }

    fn on_record(&mut self, record: &Record) {
        if record.player != self.report.player || !record.is_home() {
            return;
        }
        let r = &mut self.report;
        r.games += 1;
        r.total_points += u64::from(record.points);
        r.total_assists += u64::from(record.assists);
        r.total_blocks += u64::from(record.blocks);
        r.total_minutes += record.minutes;
        self.in_current_match = true;
    }

    fn on_match_closed(&mut self, summary: &MatchSummary) {
        if self.in_current_match && summary.is_win() {
            debug!("{} credited with win on {}", self.report.player, summary.date);
            self.report.games_won += 1;
        }
        self.in_current_match = false;
    }

    fn finish(self) -> Result<PlayerReport, StatsError> {
        if self.report.games == 0 {
            warn!("No home rows for player {:?}", self.report.player);
            return Err(StatsError::NoDataPoints);
        }
        Ok(self.report)
    }
}

pub fn player_report<R: BufRead>(reader: R, player: &str) -> Result<PlayerReport, StatsError> {
    scan(RecordScanner::new(reader), ReportReducer::new(player))
}

/// Scan `in_file` for `player` and write the report to `out_file`.
///
/// The output is only created once the scan has succeeded.
#[instrument(skip_all, fields(player = player))]
pub fn generate_player_report(
    in_file: impl AsRef<Path>,
    player: &str,
    out_file: impl AsRef<Path>,
) -> Result<PlayerReport, StatsError> {
    let report = scan(RecordScanner::open(in_file)?, ReportReducer::new(player))?;

    let out_path = out_file.as_ref();
    let mut writer = create_output(out_path)?;
    write_output(&mut writer, out_path, &report.render())?;

    info!(
        "Report for {}: {} games, {} won, written to {}",
        player,
        report.games,
        report.games_won,
        out_path.display()
    );
    Ok(report)
}
