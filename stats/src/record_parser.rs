use crate::types::{MatchDate, Record, StatsError, MAX_NAME_LEN};
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD|PlayerName,TeamName#Points,Assists,Blocks,Minutes`
///
/// Signs are accepted on the numeric fields so that negative values reach
/// validation and fail there instead of silently ending the scan.
static RECORD_LINE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        concat!(
            r"^(-?\d+)-(-?\d+)-(-?\d+)\|",
            r"([^,]{{1,{max}}}),([^#]{{1,{max}}})#",
            r"\s*([+-]?\d+),\s*([+-]?\d+),\s*([+-]?\d+),",
            r"\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)$",
        ),
        max = MAX_NAME_LEN
    );
    Regex::new(&pattern).expect("record grammar is a valid regex")
});

/// A line that matched the grammar but has not been range-checked yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: MatchDate,
    pub player: String,
    pub team: String,
    pub points: i32,
    pub assists: i32,
    pub blocks: i32,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(RawRecord),
    /// Whitespace only; the scanner steps over it.
    Blank,
    /// Not a record. Everything from here on is ignored.
    Malformed,
}

/// Match one input line against the record grammar.
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let Some(caps) = RECORD_LINE.captures(line) else {
        return LineOutcome::Malformed;
    };

    let int = |idx: usize| caps[idx].parse::<i32>().ok();
    let (Some(year), Some(month), Some(day)) = (int(1), int(2), int(3)) else {
        return LineOutcome::Malformed;
    };
    let (Some(points), Some(assists), Some(blocks)) = (int(6), int(7), int(8)) else {
        return LineOutcome::Malformed;
    };
    let minutes = match caps[9].parse::<f64>() {
        Ok(m) if m.is_finite() => m,
        _ => return LineOutcome::Malformed,
    };

    LineOutcome::Parsed(RawRecord {
        date: MatchDate::new(year, month, day),
        player: caps[4].to_string(),
        team: caps[5].to_string(),
        points,
        assists,
        blocks,
        minutes,
    })
}

impl RawRecord {
    /// Range-check the fields. Dates are checked before the stat columns.
    pub fn validate(self, line: usize) -> Result<Record, StatsError> {
        let MatchDate { year, month, day } = self.date;
        if !self.date.is_valid() {
            return Err(StatsError::BadDate {
                line,
                year,
                month,
                day,
            });
        }

        let count = |value: i32, field: &str| {
            u32::try_from(value).map_err(|_| StatsError::BadRecord {
                line,
                reason: format!("{} is negative ({})", field, value),
            })
        };
        let points = count(self.points, "points")?;
        let assists = count(self.assists, "assists")?;
        let blocks = count(self.blocks, "blocks")?;

        if self.minutes <= 0.0 {
            return Err(StatsError::BadRecord {
                line,
                reason: format!("minutes must be positive ({})", self.minutes),
            });
        }

        Ok(Record {
            date: self.date,
            player: self.player,
            team: self.team,
            points,
            assists,
            blocks,
            minutes: self.minutes,
        })
    }
}
