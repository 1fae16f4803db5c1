use crate::match_fold::{scan, Reducer};
use crate::scanner::RecordScanner;
use crate::types::{Record, StatsError};
use std::io::BufRead;
use std::path::Path;
use tracing::{info, instrument, warn};

struct AverageReducer<'a> {
    player: &'a str,
    total_points: u64,
    rows: u32,
}

impl Reducer for AverageReducer<'_> {
    type Output = f64;

    fn name(&self) -> &'static str {
        "average"
    }

    fn accepts(&self, record: &Record) -> bool {
        record.player == self.player
    }

    fn on_record(&mut self, record: &Record) {
        self.total_points += u64::from(record.points);
        self.rows += 1;
    }

    fn finish(self) -> Result<f64, StatsError> {
        if self.rows == 0 {
            warn!("No rows for player {:?}", self.player);
            return Err(StatsError::NoDataPoints);
        }
        Ok(self.total_points as f64 / f64::from(self.rows))
    }
}

pub fn points_average<R: BufRead>(reader: R, player: &str) -> Result<f64, StatsError> {
    scan(
        RecordScanner::new(reader),
        AverageReducer {
            player,
            total_points: 0,
            rows: 0,
        },
    )
}

/// Average points per row for `player`, any team.
#[instrument(skip_all, fields(player = player))]
pub fn average_points_player(
    in_file: impl AsRef<Path>,
    player: &str,
) -> Result<f64, StatsError> {
    let average = scan(
        RecordScanner::open(in_file)?,
        AverageReducer {
            player,
            total_points: 0,
            rows: 0,
        },
    )?;
    info!("Average points for {}: {:.2}", player, average);
    Ok(average)
}
