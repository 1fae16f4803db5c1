use crate::match_fold::{scan, Reducer};
use crate::output::{create_output, write_output};
use crate::scanner::RecordScanner;
use crate::types::{MatchSummary, Record, StatsError, HOME_TEAM};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, instrument};

/// Every home match played in one year, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchHistory {
    pub year: i32,
    pub matches: Vec<MatchSummary>,
    pub wins: u32,
    pub losses: u32,
}

impl MatchHistory {
    /// Render the history file. Empty when no match was played.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.matches.is_empty() {
            return out;
        }

        let _ = writeln!(out, "{}", self.year);
        for m in &self.matches {
            let _ = writeln!(
                out,
                "{:02}-{:02}:{}({})-{}({})",
                m.date.month, m.date.day, HOME_TEAM, m.home_score, m.opponent, m.opponent_score
            );
        }
        let _ = writeln!(out, "Record: {}W-{}L", self.wins, self.losses);
        out
    }
}

struct HistoryReducer {
    history: MatchHistory,
    found: bool,
}

impl HistoryReducer {
    fn new(year: i32) -> Self {
        Self {
            history: MatchHistory {
                year,
                matches: Vec::new(),
                wins: 0,
                losses: 0,
            },
            found: false,
        }
    }
}

impl Reducer for HistoryReducer {
    type Output = MatchHistory;

    fn name(&self) -> &'static str {
        "history"
    }

    fn accepts(&self, record: &Record) -> bool {
        record.date.year == self.history.year
    }

    fn on_record(&mut self, _record: &Record) {
        self.found = true;
    }

    fn on_match_closed(&mut self, summary: &MatchSummary) {
        if summary.is_win() {
            self.history.wins += 1;
        } else {
            self.history.losses += 1;
        }
        self.history.matches.push(summary.clone());
    }

    fn finish(self) -> Result<MatchHistory, StatsError> {
        if !self.found {
            return Err(StatsError::NoDataPoints);
        }
        Ok(self.history)
    }
}

/// Build the history for `year` from an already-open reader.
pub fn matches_history<R: BufRead>(reader: R, year: i32) -> Result<MatchHistory, StatsError> {
    if year <= 0 {
        return Err(StatsError::bad_date_arg(year, 1, 1));
    }
    scan(RecordScanner::new(reader), HistoryReducer::new(year))
}

/// Write the match history for `year` to `out_file`.
///
/// The output is created before the scan starts, so a bad record or an empty
/// year leaves it truncated to zero bytes.
#[instrument(skip_all, fields(year = year))]
pub fn generate_matches_history(
    in_file: impl AsRef<Path>,
    year: i32,
    out_file: impl AsRef<Path>,
) -> Result<MatchHistory, StatsError> {
    if year <= 0 {
        return Err(StatsError::bad_date_arg(year, 1, 1));
    }
    let out_path = out_file.as_ref();
    info!("Generating match history for {} into {}", year, out_path.display());

    let records = RecordScanner::open(in_file)?;
    let mut writer = create_output(out_path)?;

    let history = scan(records, HistoryReducer::new(year))?;
    write_output(&mut writer, out_path, &history.render())?;

    info!(
        "Match history for {}: {} matches, {}W-{}L",
        year,
        history.matches.len(),
        history.wins,
        history.losses
    );
    Ok(history)
}
