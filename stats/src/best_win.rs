use crate::match_fold::{scan, Reducer};
use crate::scanner::RecordScanner;
use crate::types::{MatchSummary, StatsError};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument};

struct BestWinReducer {
    year: i32,
    month: i32,
    best: Option<MatchSummary>,
}

impl BestWinReducer {
    fn new(year: i32, month: i32) -> Self {
        Self {
            year,
            month,
            best: None,
        }
    }

    fn beats_best(&self, candidate: &MatchSummary) -> bool {
        match &self.best {
            None => true,
            Some(best) => {
                candidate.margin() > best.margin()
                    || (candidate.margin() == best.margin()
                        && candidate.home_score > best.home_score)
            }
        }
    }
}

impl Reducer for BestWinReducer {
    type Output = MatchSummary;

    fn name(&self) -> &'static str {
        "best-win"
    }

    fn on_match_closed(&mut self, summary: &MatchSummary) {
        let date = summary.date;
        if date.year != self.year || date.month != self.month || !summary.is_win() {
            return;
        }
        if self.beats_best(summary) {
            debug!("New best win on {} by {}", summary.date, summary.margin());
            self.best = Some(summary.clone());
        }
    }

    fn finish(self) -> Result<MatchSummary, StatsError> {
        self.best.ok_or(StatsError::NoDataPoints)
    }
}

fn check_month(year: i32, month: i32) -> Result<(), StatsError> {
    if year <= 0 || !(1..=12).contains(&month) {
        return Err(StatsError::bad_date_arg(year, month, 1));
    }
    Ok(())
}

/// Widest home win in `year`/`month`; equal margins go to the higher home score.
pub fn best_winning_match<R: BufRead>(
    reader: R,
    year: i32,
    month: i32,
) -> Result<MatchSummary, StatsError> {
    check_month(year, month)?;
    scan(RecordScanner::new(reader), BestWinReducer::new(year, month))
}

#[instrument(skip_all, fields(year = year, month = month))]
pub fn find_best_winning_match(
    in_file: impl AsRef<Path>,
    year: i32,
    month: i32,
) -> Result<MatchSummary, StatsError> {
    check_month(year, month)?;
    let best = scan(RecordScanner::open(in_file)?, BestWinReducer::new(year, month))?;
    info!(
        "Best win in {}-{:02}: {} {}-{} {}",
        year, month, best.date, best.home_score, best.opponent_score, best.opponent
    );
    Ok(best)
}

/// Home score of the best winning match in `year`/`month`.
pub fn best_winning_match_score(
    in_file: impl AsRef<Path>,
    year: i32,
    month: i32,
) -> Result<u64, StatsError> {
    find_best_winning_match(in_file, year, month).map(|m| m.home_score)
}
