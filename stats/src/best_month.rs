use crate::match_fold::{scan, Reducer};
use crate::scanner::RecordScanner;
use crate::types::{MatchSummary, StatsError};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, instrument};

/// Home wins and games played in one calendar month, across all years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    pub month: i32,
    pub games: u32,
    pub wins: u32,
}

impl MonthRecord {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }

    /// Strictly better win rate, compared without rounding.
    fn beats(&self, other: &MonthRecord) -> bool {
        u64::from(self.wins) * u64::from(other.games)
            > u64::from(other.wins) * u64::from(self.games)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMonth {
    pub month: i32,
    pub win_rate: f64,
    pub months: Vec<MonthRecord>,
}

struct BestMonthReducer {
    months: [MonthRecord; 12],
}

impl Reducer for BestMonthReducer {
    type Output = BestMonth;

    fn name(&self) -> &'static str {
        "best-month"
    }

    fn on_match_closed(&mut self, summary: &MatchSummary) {
        // month is already range-checked by the scanner
        let slot = &mut self.months[(summary.date.month - 1) as usize];
        slot.games += 1;
        if summary.is_win() {
            slot.wins += 1;
        }
    }

    fn finish(self) -> Result<BestMonth, StatsError> {
        let mut best: Option<&MonthRecord> = None;
        for record in self.months.iter().filter(|m| m.games > 0) {
            if best.map_or(true, |b| record.beats(b)) {
                best = Some(record);
            }
        }

        match best {
            Some(b) if b.wins > 0 => Ok(BestMonth {
                month: b.month,
                win_rate: b.win_rate(),
                months: self.months.iter().copied().filter(|m| m.games > 0).collect(),
            }),
            _ => Err(StatsError::NoDataPoints),
        }
    }
}

impl BestMonthReducer {
    fn new() -> Self {
        let mut months = [MonthRecord::default(); 12];
        for (idx, m) in months.iter_mut().enumerate() {
            m.month = idx as i32 + 1;
        }
        Self { months }
    }
}

/// Month with the best home win rate. Earlier months win ties.
pub fn best_month_of<R: BufRead>(reader: R) -> Result<BestMonth, StatsError> {
    scan(RecordScanner::new(reader), BestMonthReducer::new())
}

#[instrument(skip_all)]
pub fn find_best_month(in_file: impl AsRef<Path>) -> Result<BestMonth, StatsError> {
    let best = scan(RecordScanner::open(in_file)?, BestMonthReducer::new())?;
    info!("Best month: {} ({:.3} win rate)", best.month, best.win_rate);
    Ok(best)
}

pub fn best_month(in_file: impl AsRef<Path>) -> Result<i32, StatsError> {
    find_best_month(in_file).map(|b| b.month)
}
