use crate::match_fold::{scan, Reducer};
use crate::scanner::RecordScanner;
use crate::types::{MatchDate, Record, StatsError};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, instrument};

/// Best combined score of a single match and who posted it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchMvp {
    pub date: MatchDate,
    pub player: String,
    pub team: String,
    pub combined_score: f64,
}

struct MvpReducer {
    date: MatchDate,
    best: Option<MatchMvp>,
}

impl Reducer for MvpReducer {
    type Output = MatchMvp;

    fn name(&self) -> &'static str {
        "mvp"
    }

    fn accepts(&self, record: &Record) -> bool {
        record.date == self.date
    }

    fn on_record(&mut self, record: &Record) {
        let score = record.combined_score();
        // strict: the first player to reach a score keeps it
        if self.best.as_ref().map_or(true, |b| score > b.combined_score) {
            self.best = Some(MatchMvp {
                date: self.date,
                player: record.player.clone(),
                team: record.team.clone(),
                combined_score: score,
            });
        }
    }

    fn finish(self) -> Result<MatchMvp, StatsError> {
        self.best.ok_or(StatsError::NoDataPoints)
    }
}

fn check_date(date: MatchDate) -> Result<(), StatsError> {
    if date.is_valid() {
        Ok(())
    } else {
        Err(StatsError::bad_date_arg(date.year, date.month, date.day))
    }
}

pub fn match_mvp<R: BufRead>(reader: R, date: MatchDate) -> Result<MatchMvp, StatsError> {
    check_date(date)?;
    scan(RecordScanner::new(reader), MvpReducer { date, best: None })
}

/// Find the MVP of the match played on `date` in `in_file`.
#[instrument(skip_all, fields(date = %date))]
pub fn find_match_mvp(in_file: impl AsRef<Path>, date: MatchDate) -> Result<MatchMvp, StatsError> {
    check_date(date)?;
    let mvp = scan(RecordScanner::open(in_file)?, MvpReducer { date, best: None })?;
    info!("MVP for {}: {} ({:.2})", date, mvp.player, mvp.combined_score);
    Ok(mvp)
}

/// Highest combined score (points + 1.5 assists + 2 blocks + 0.2 minutes) on the given date.
pub fn match_most_valuable_player(
    in_file: impl AsRef<Path>,
    year: i32,
    month: i32,
    day: i32,
) -> Result<f64, StatsError> {
    find_match_mvp(in_file, MatchDate::new(year, month, day)).map(|mvp| mvp.combined_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GAME: &str = "\
2024-01-10|Z. Edey,Purdue#20,3,5,28.5
2024-01-10|J. Doe,Indiana#18,2,1,25.0
2024-01-10|B. Smith,Purdue#10,8,0,36.5
2024-01-14|Z. Edey,Purdue#40,3,5,28.5
";

    #[test]
    fn test_mvp_of_match() {
        let mvp = match_mvp(Cursor::new(GAME), MatchDate::new(2024, 1, 10)).unwrap();
        assert_eq!(mvp.player, "Z. Edey");
        assert!((mvp.combined_score - 40.2).abs() < 1e-9);
    }

    #[test]
    fn test_mvp_first_seen_wins_ties() {
        let data = "\
2024-03-01|First,Purdue#10,0,0,10
2024-03-01|Second,Iowa#10,0,0,10
";
        let mvp = match_mvp(Cursor::new(data), MatchDate::new(2024, 3, 1)).unwrap();
        assert_eq!(mvp.player, "First");
    }

    #[test]
    fn test_mvp_no_match_on_date() {
        assert!(matches!(
            match_mvp(Cursor::new(GAME), MatchDate::new(2024, 1, 11)),
            Err(StatsError::NoDataPoints)
        ));
    }

    #[test]
    fn test_mvp_rejects_bad_date_argument() {
        assert!(matches!(
            match_mvp(Cursor::new(GAME), MatchDate::new(2024, 13, 1)),
            Err(StatsError::BadDate { month: 13, .. })
        ));
        assert!(matches!(
            match_most_valuable_player("/no/such/file", 2024, 1, 31),
            Err(StatsError::BadDate { day: 31, .. })
        ));
    }
}
