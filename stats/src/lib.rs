// Statistics crate for box-score logs
// One record grammar and one match fold, shared by every query

pub mod types;
pub mod record_parser;
pub mod scanner;
pub mod match_fold;
pub mod output;

// Queries
pub mod history;
pub mod mvp;
pub mod player_average;
pub mod best_win;
pub mod best_month;
pub mod player_report;

// Numeric result codes for older callers
pub mod legacy;

// Re-export main types
pub use types::*;
pub use record_parser::{parse_line, LineOutcome, RawRecord};
pub use scanner::RecordScanner;
pub use match_fold::{scan, MatchTracker, Reducer};

// Re-export queries
pub use history::{generate_matches_history, matches_history, MatchHistory};
pub use mvp::{find_match_mvp, match_most_valuable_player, match_mvp, MatchMvp};
pub use player_average::{average_points_player, points_average};
pub use best_win::{best_winning_match, best_winning_match_score, find_best_winning_match};
pub use best_month::{best_month, best_month_of, find_best_month, BestMonth, MonthRecord};
pub use player_report::{generate_player_report, player_report, PlayerReport};
