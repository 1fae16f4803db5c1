use crate::types::{MatchDate, MatchSummary, Record, StatsError};
use tracing::debug;

/// Running totals for the match currently being read.
///
/// A match is every consecutive record sharing one date. It closes when a
/// record with another date arrives, or when the input ends.
#[derive(Debug, Default)]
pub struct MatchTracker {
    current: Option<MatchDate>,
    home_score: u64,
    opponent_score: u64,
    opponent: String,
}

impl MatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning the match it closed, if any.
    pub fn push(&mut self, record: &Record) -> Option<MatchSummary> {
        let closed = match self.current {
            Some(date) if date == record.date => None,
            Some(_) => self.take_summary(),
            None => None,
        };

        if self.current != Some(record.date) {
            self.current = Some(record.date);
            self.home_score = 0;
            self.opponent_score = 0;
            self.opponent.clear();
        }

        if record.is_home() {
            self.home_score += u64::from(record.points);
        } else {
            self.opponent_score += u64::from(record.points);
            if self.opponent.is_empty() {
                self.opponent = record.team.clone();
            }
        }

        closed
    }

    /// Close whatever match is still open at end of input.
    pub fn finish(mut self) -> Option<MatchSummary> {
        self.take_summary()
    }

    fn take_summary(&mut self) -> Option<MatchSummary> {
        let date = self.current.take()?;
        Some(MatchSummary {
            date,
            home_score: self.home_score,
            opponent_score: self.opponent_score,
            opponent: std::mem::take(&mut self.opponent),
        })
    }
}

/// Accumulation policy for one query over the record stream.
pub trait Reducer {
    type Output;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Records rejected here are invisible to the query, match tracking included.
    fn accepts(&self, _record: &Record) -> bool {
        true
    }

    fn on_record(&mut self, _record: &Record) {}

    fn on_match_closed(&mut self, _summary: &MatchSummary) {}

    fn finish(self) -> Result<Self::Output, StatsError>;
}

/// Drive `reducer` over `records` in one pass.
///
/// For each accepted record, the match it closes (if any) is reported before
/// the record itself. The first error aborts the scan and discards all state.
pub fn scan<I, R>(records: I, mut reducer: R) -> Result<R::Output, StatsError>
where
    I: IntoIterator<Item = Result<Record, StatsError>>,
    R: Reducer,
{
    let mut tracker = MatchTracker::new();
    let mut accepted = 0usize;
    let mut matches = 0usize;

    for record in records {
        let record = record?;
        if !reducer.accepts(&record) {
            continue;
        }
        accepted += 1;

        if let Some(summary) = tracker.push(&record) {
            debug!(
                "[{}] closed {}: {}-{} vs {:?}",
                reducer.name(),
                summary.date,
                summary.home_score,
                summary.opponent_score,
                summary.opponent
            );
            matches += 1;
            reducer.on_match_closed(&summary);
        }
        reducer.on_record(&record);
    }

    if let Some(summary) = tracker.finish() {
        debug!("[{}] closed final match {}", reducer.name(), summary.date);
        matches += 1;
        reducer.on_match_closed(&summary);
    }

    debug!(
        "[{}] scan complete: {} records, {} matches",
        reducer.name(),
        accepted,
        matches
    );
    reducer.finish()
}
