use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Team whose rows make up the home side of every match.
pub const HOME_TEAM: &str = "Purdue";

/// Longest player or team name accepted by the record grammar.
pub const MAX_NAME_LEN: usize = 63;

/// Date of a match, also used as the key that separates one match from the next.
///
/// Months are treated as 30 days long; this is a box-score convention, not a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl MatchDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }
}

impl fmt::Display for MatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    year > 0 && (1..=12).contains(&month) && (1..=30).contains(&day)
}

/// One player's stat line for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: MatchDate,
    pub player: String,
    pub team: String,
    pub points: u32,
    pub assists: u32,
    pub blocks: u32,
    pub minutes: f64,
}

impl Record {
    pub fn is_home(&self) -> bool {
        self.team == HOME_TEAM
    }

    /// MVP metric: points + 1.5 assists + 2 blocks + 0.2 minutes.
    pub fn combined_score(&self) -> f64 {
        f64::from(self.points)
            + 1.5 * f64::from(self.assists)
            + 2.0 * f64::from(self.blocks)
            + 0.2 * self.minutes
    }
}

/// A finished match: everything the fold knows once the date changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub date: MatchDate,
    pub home_score: u64,
    pub opponent_score: u64,
    /// First non-home team name seen in the match, empty if none.
    pub opponent: String,
}

impl MatchSummary {
    pub fn margin(&self) -> i128 {
        i128::from(self.home_score) - i128::from(self.opponent_score)
    }

    /// Ties count as losses.
    pub fn is_win(&self) -> bool {
        self.home_score > self.opponent_score
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad record on line {line}: {reason}")]
    BadRecord { line: usize, reason: String },
    #[error("bad date {year}-{month}-{day} on line {line}")]
    BadDate {
        line: usize,
        year: i32,
        month: i32,
        day: i32,
    },
    #[error("no data points matched the query")]
    NoDataPoints,
}

impl StatsError {
    pub(crate) fn bad_date_arg(year: i32, month: i32, day: i32) -> Self {
        StatsError::BadDate {
            line: 0,
            year,
            month,
            day,
        }
    }

    pub fn result_code(&self) -> ResultCode {
        match self {
            StatsError::FileRead { .. } => ResultCode::FileReadError,
            StatsError::FileWrite { .. } => ResultCode::FileWriteError,
            StatsError::BadRecord { .. } => ResultCode::BadRecord,
            StatsError::BadDate { .. } => ResultCode::BadDate,
            StatsError::NoDataPoints => ResultCode::NoDataPoints,
        }
    }

    pub fn code(&self) -> i32 {
        self.result_code() as i32
    }
}

/// Numeric status codes shared with the sentinel-returning `legacy` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    FileReadError = -1,
    FileWriteError = -2,
    BadRecord = -3,
    BadDate = -4,
    NoDataPoints = -5,
}

impl ResultCode {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ResultCode::Success),
            -1 => Some(ResultCode::FileReadError),
            -2 => Some(ResultCode::FileWriteError),
            -3 => Some(ResultCode::BadRecord),
            -4 => Some(ResultCode::BadDate),
            -5 => Some(ResultCode::NoDataPoints),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResultCode::Success => "SUCCESS",
            ResultCode::FileReadError => "FILE_READ_ERR",
            ResultCode::FileWriteError => "FILE_WRITE_ERR",
            ResultCode::BadRecord => "BAD_RECORD",
            ResultCode::BadDate => "BAD_DATE",
            ResultCode::NoDataPoints => "NO_DATA_POINTS",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCode::Success => f.write_str("SUCCESS"),
            other => write!(f, "ERROR: {}", other.name()),
        }
    }
}

impl<T> From<&Result<T, StatsError>> for ResultCode {
    fn from(result: &Result<T, StatsError>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(e) => e.result_code(),
        }
    }
}
