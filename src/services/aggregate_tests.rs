use chrono::{NaiveDate, NaiveDateTime};

use super::aggregate::{aggregate, AggregateError};
use crate::models::{SummaryRow, TestRecord};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn record(serial: &str, board: &str, product: Option<&str>, time: &str, result: &str) -> TestRecord {
    let start_time = if time.is_empty() {
        None
    } else {
        Some(NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").unwrap())
    };
    TestRecord {
        serial: serial.to_string(),
        board: board.to_string(),
        product: product.map(String::from),
        start_time,
        result: result.to_string(),
    }
}

#[test]
fn day_shift_scenario_counts_and_excludes_out_of_window() {
    let records = vec![
        record("S1", "B1", Some("NVPN-X"), "2024-01-01 10:00:00", "PASS"),
        record("S2", "B1", Some("NVPN-X"), "2024-01-01 10:05:00", "FAIL"),
        // 16:00 is past the day-shift end, excluded even though it failed
        record("S3", "B1", Some("NVPN-X"), "2024-01-01 16:00:00", "FAIL"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "day_shift", "").unwrap();

    assert_eq!(
        table.rows,
        vec![SummaryRow {
            board: "B1".to_string(),
            test_actual: 2,
            failures: 1,
        }]
    );
}

#[test]
fn window_bounds_are_inclusive() {
    let records = vec![
        record("S1", "B1", Some("P"), "2024-01-01 00:00:01", "PASS"),
        record("S2", "B1", Some("P"), "2024-01-01 15:00:00", "PASS"),
        record("S3", "B1", Some("P"), "2024-01-01 00:00:00", "PASS"),
        record("S4", "B1", Some("P"), "2024-01-01 15:00:01", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "day_shift", "").unwrap();

    assert_eq!(table.rows[0].test_actual, 2);
}

#[test]
fn unknown_shift_key_is_rejected() {
    let records = vec![record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "PASS")];

    let err = aggregate(&records, date("2024-01-01"), "swing_shift", "").unwrap_err();

    assert_eq!(err, AggregateError::UnknownShift("swing_shift".to_string()));
}

#[test]
fn product_filter_is_case_insensitive_substring() {
    let records = vec![
        record("S1", "B1", Some("XABCY"), "2024-01-01 10:00:00", "PASS"),
        record("S2", "B1", Some("OTHER"), "2024-01-01 10:00:00", "PASS"),
        record("S3", "B1", None, "2024-01-01 10:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "abc").unwrap();

    assert_eq!(table.rows[0].test_actual, 1);
}

#[test]
fn null_product_never_matches_even_empty_filter() {
    let records = vec![
        record("S1", "B1", None, "2024-01-01 10:00:00", "PASS"),
        record("S2", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(table.rows[0].test_actual, 1);
}

#[test]
fn unparseable_timestamp_is_excluded_not_fatal() {
    let records = vec![
        record("S1", "B1", Some("P"), "", "PASS"),
        record("S2", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(table.rows[0].test_actual, 1);
}

#[test]
fn duplicate_failing_rows_count_once() {
    let records = vec![
        record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "FAIL"),
        record("S1", "B1", Some("P"), "2024-01-01 11:00:00", "FAIL"),
        record("S1", "B1", Some("P"), "2024-01-01 12:00:00", "FAIL"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(table.rows[0].test_actual, 1);
    assert_eq!(table.rows[0].failures, 1);
}

#[test]
fn result_match_is_case_sensitive_exact() {
    let records = vec![
        record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "fail"),
        record("S2", "B1", Some("P"), "2024-01-01 10:00:00", "FAILED"),
        record("S3", "B1", Some("P"), "2024-01-01 10:00:00", "FAIL"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(table.rows[0].failures, 1);
}

#[test]
fn boards_without_failures_get_zero() {
    let records = vec![
        record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
        record("S2", "B2", Some("P"), "2024-01-01 10:00:00", "FAIL"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(
        table.rows,
        vec![
            SummaryRow {
                board: "B1".to_string(),
                test_actual: 1,
                failures: 0,
            },
            SummaryRow {
                board: "B2".to_string(),
                test_actual: 1,
                failures: 1,
            },
        ]
    );
}

#[test]
fn rows_are_sorted_by_board() {
    let records = vec![
        record("S1", "B3", Some("P"), "2024-01-01 10:00:00", "PASS"),
        record("S2", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
        record("S3", "B2", Some("P"), "2024-01-01 10:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    let boards: Vec<&str> = table.rows.iter().map(|r| r.board.as_str()).collect();
    assert_eq!(boards, vec!["B1", "B2", "B3"]);
}

#[test]
fn empty_record_set_yields_empty_table() {
    let table = aggregate(&[], date("2024-01-01"), "full_day", "").unwrap();
    assert!(table.is_empty());
}

#[test]
fn empty_grouping_key_is_an_error() {
    let records = vec![record("", "B1", Some("P"), "2024-01-01 10:00:00", "PASS")];
    let err = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap_err();
    assert_eq!(err, AggregateError::MissingField { field: "serial" });

    let records = vec![record("S1", "", Some("P"), "2024-01-01 10:00:00", "PASS")];
    let err = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap_err();
    assert_eq!(err, AggregateError::MissingField { field: "board" });
}

#[test]
fn empty_key_outside_window_is_not_an_error() {
    // The grouping-key check only applies to records that survive filtering.
    let records = vec![
        record("", "B1", Some("P"), "2024-01-01 23:59:59", "PASS"),
        record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "day_shift", "").unwrap();

    assert_eq!(table.rows[0].test_actual, 1);
}

#[test]
fn same_serial_on_two_boards_counts_on_each() {
    let records = vec![
        record("S1", "B1", Some("P"), "2024-01-01 10:00:00", "PASS"),
        record("S1", "B2", Some("P"), "2024-01-01 11:00:00", "PASS"),
    ];

    let table = aggregate(&records, date("2024-01-01"), "full_day", "").unwrap();

    assert_eq!(table.rows.len(), 2);
    assert!(table.rows.iter().all(|r| r.test_actual == 1));
}
