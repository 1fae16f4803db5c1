use boxscore_stats::{
    average_points_player, best_month, best_winning_match_score, generate_matches_history,
    generate_player_report, legacy, match_most_valuable_player, StatsError,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TWO_ROWS: &str = "\
2024-01-10|Z. Edey,Purdue#20,3,5,28.5
2024-01-10|J. Doe,Indiana#18,2,1,25.0";

const SEASON: &str = "\
2023-11-06|Z. Edey,Purdue#21,1,2,27.0
2023-11-06|S. Hill,Samford#15,0,1,30.0
2024-01-10|Z. Edey,Purdue#20,3,5,28.5
2024-01-10|F. Loyer,Purdue#14,4,0,31.0
2024-01-10|J. Doe,Indiana#18,2,1,25.0
2024-01-10|T. Gal,Indiana#12,1,0,22.0
2024-01-14|Z. Edey,Purdue#15,2,2,31.0
2024-01-14|A. Lee,Iowa#22,4,0,33.0
2024-01-27|Z. Edey,Purdue#35,2,4,34.0
2024-01-27|R. Cole,Minnesota#12,1,1,26.0
2024-02-03|F. Loyer,Purdue#18,1,0,33.0
2024-02-03|M. Fox,Ohio State#25,2,1,30.0
";

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_history_two_row_match() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "game_data.txt", TWO_ROWS);
    let output = dir.path().join("history_2024.txt");

    let history = generate_matches_history(&input, 2024, &output).unwrap();

    assert_eq!(history.wins, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2024\n01-10:Purdue(20)-Indiana(18)\nRecord: 1W-0L\n"
    );
}

#[test]
fn test_history_season_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);
    let output = dir.path().join("history.txt");

    generate_matches_history(&input, 2024, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2024\n\
01-10:Purdue(34)-Indiana(30)\n\
01-14:Purdue(15)-Iowa(22)\n\
01-27:Purdue(35)-Minnesota(12)\n\
02-03:Purdue(18)-Ohio State(25)\n\
Record: 2W-2L\n"
    );
}

#[test]
fn test_history_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);
    let output = dir.path().join("history.txt");

    generate_matches_history(&input, 2024, &output).unwrap();
    let first = fs::read(&output).unwrap();
    generate_matches_history(&input, 2024, &output).unwrap();
    assert_eq!(first, fs::read(&output).unwrap());
}

#[test]
fn test_history_without_matching_year_leaves_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);
    let output = dir.path().join("history.txt");
    fs::write(&output, "stale contents").unwrap();

    let result = generate_matches_history(&input, 2019, &output);

    assert!(matches!(result, Err(StatsError::NoDataPoints)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_history_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("history.txt");

    let result = generate_matches_history(dir.path().join("nope.txt"), 2024, &output);

    assert!(matches!(result, Err(StatsError::FileRead { .. })));
    assert!(!output.exists());
}

#[test]
fn test_history_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);

    let result = generate_matches_history(&input, 2024, dir.path().join("missing/history.txt"));
    assert!(matches!(result, Err(StatsError::FileWrite { .. })));
}

#[test]
fn test_bad_date_aborts_every_operation() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "bad.txt",
        &format!("{}\n2024-13-01|Z. Edey,Purdue#10,1,1,20.0\n", TWO_ROWS),
    );
    let output = dir.path().join("history.txt");

    assert!(matches!(
        generate_matches_history(&input, 2024, &output),
        Err(StatsError::BadDate { line: 3, month: 13, .. })
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert!(matches!(
        match_most_valuable_player(&input, 2024, 1, 10),
        Err(StatsError::BadDate { .. })
    ));
    assert!(matches!(
        average_points_player(&input, "Z. Edey"),
        Err(StatsError::BadDate { .. })
    ));
    assert!(matches!(
        best_winning_match_score(&input, 2024, 1),
        Err(StatsError::BadDate { .. })
    ));
    assert!(matches!(best_month(&input), Err(StatsError::BadDate { .. })));

    let report = dir.path().join("report.txt");
    assert!(matches!(
        generate_player_report(&input, "Z. Edey", &report),
        Err(StatsError::BadDate { .. })
    ));
    assert!(!report.exists());
}

#[test]
fn test_negative_stat_is_bad_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "bad.txt", "2024-01-10|Z. Edey,Purdue#20,-3,5,28.5\n");

    assert!(matches!(
        average_points_player(&input, "Z. Edey"),
        Err(StatsError::BadRecord { line: 1, .. })
    ));
    assert_eq!(legacy::average_points_player(&input, "Z. Edey"), -3.0);
}

#[test]
fn test_trailing_garbage_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "garbage.txt",
        &format!("{}\n#### end of export ####\n2024-13-99|x,y#1,1,1,1\n", TWO_ROWS),
    );

    let mvp = match_most_valuable_player(&input, 2024, 1, 10).unwrap();
    assert!((mvp - 40.2).abs() < 1e-9);
}

#[test]
fn test_non_utf8_bytes_do_not_fail_the_read() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    let mut contents = format!("{}\n", TWO_ROWS).into_bytes();
    contents.extend_from_slice(b"2024-01-11|L. Don\xe8i\xe6,Purdue#30,1,1,20.0\n");
    fs::write(&input, contents).unwrap();

    let mvp = match_most_valuable_player(&input, 2024, 1, 10).unwrap();
    assert!((mvp - 40.2).abs() < 1e-9);
    assert_eq!(best_winning_match_score(&input, 2024, 1).unwrap(), 20);
}

#[test]
fn test_player_name_does_not_mask_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let bad = write_input(
        &dir,
        "bad.txt",
        &format!("{}\n2024-13-01|Z. Edey,Purdue#10,1,1,20.0\n", TWO_ROWS),
    );
    let long_name = "x".repeat(70);
    let report = dir.path().join("report.txt");

    assert!(matches!(
        average_points_player(&missing, ""),
        Err(StatsError::FileRead { .. })
    ));
    assert!(matches!(
        average_points_player(&bad, ""),
        Err(StatsError::BadDate { .. })
    ));
    assert!(matches!(
        generate_player_report(&bad, &long_name, &report),
        Err(StatsError::BadDate { .. })
    ));
    assert!(!report.exists());

    assert_eq!(legacy::average_points_player(&missing, ""), -1.0);
    assert_eq!(legacy::average_points_player(&bad, ""), -4.0);
    assert_eq!(legacy::generate_player_report(&bad, &long_name, &report), -4);

    let good = write_input(&dir, "good.txt", TWO_ROWS);
    assert!(matches!(
        average_points_player(&good, ""),
        Err(StatsError::NoDataPoints)
    ));
}

#[test]
fn test_numeric_queries_on_season() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);

    let avg = average_points_player(&input, "Z. Edey").unwrap();
    assert!((avg - 22.75).abs() < 1e-9);

    assert_eq!(best_winning_match_score(&input, 2024, 1).unwrap(), 35);
    assert!(matches!(
        best_winning_match_score(&input, 2024, 2),
        Err(StatsError::NoDataPoints)
    ));

    // November: 1 of 1, January: 2 of 3, February: 0 of 1
    assert_eq!(best_month(&input).unwrap(), 11);
}

#[test]
fn test_player_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);
    let output = dir.path().join("edey_report.txt");

    let report = generate_player_report(&input, "F. Loyer", &output).unwrap();

    assert_eq!(report.games, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Player: F. Loyer\n\
Games: 2\n\
Games Won: 1\n\
Points per Game: 16.00\n\
Assists per Game: 2.50\n\
Blocks per Game: 0.00\n\
Average Minutes: 32.00\n"
    );
}

#[test]
fn test_player_report_unknown_player_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "season.txt", SEASON);
    let output = dir.path().join("report.txt");

    assert!(matches!(
        generate_player_report(&input, "J. Doe", &output),
        Err(StatsError::NoDataPoints)
    ));
    assert!(!output.exists());
}

#[test]
fn test_legacy_codes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "game_data.txt", TWO_ROWS);
    let output = dir.path().join("out.txt");

    assert_eq!(legacy::generate_matches_history(&input, 2024, &output), 0);
    assert_eq!(legacy::generate_matches_history(&input, 2023, &output), -5);
    assert!((legacy::match_most_valuable_player(&input, 2024, 1, 10) - 40.2).abs() < 1e-9);
    assert_eq!(legacy::match_most_valuable_player(&input, 2024, 13, 1), -4.0);
    assert_eq!(legacy::average_points_player(&input, "J. Doe"), 18.0);
    assert_eq!(legacy::purdue_best_winning_match_score(&input, 2024, 1), 20);
    assert_eq!(legacy::purdue_best_month(&input), 1);
    assert_eq!(legacy::generate_player_report(&input, "Z. Edey", &output), 0);
    assert_eq!(legacy::generate_player_report(&input, "J. Doe", &output), -5);
}
