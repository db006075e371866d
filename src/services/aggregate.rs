//! Shift aggregation: window and product filtering, per-board distinct
//! counts, and the final left-join into a summary table.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Shift, SummaryRow, SummaryTable, TestRecord};

/// Errors the aggregator reports instead of producing a malformed table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// Shift key outside the three defined shifts.
    #[error("unknown shift key: {0:?}")]
    UnknownShift(String),
    /// A record that survived filtering is missing a grouping key.
    #[error("record has an empty {field} field and cannot be grouped")]
    MissingField { field: &'static str },
}

/// Aggregate raw records into the per-board summary table.
///
/// Pure, no I/O. Records are narrowed to the shift window on `date`
/// (inclusive bounds) and to products containing `product_filter`
/// case-insensitively, then grouped by board with distinct-serial counts for
/// both the tested set and the failing subset. Boards with no failures get
/// `failures = 0`. Rows come back sorted ascending by board identifier.
pub fn aggregate(
    records: &[TestRecord],
    date: NaiveDate,
    shift_key: &str,
    product_filter: &str,
) -> Result<SummaryTable, AggregateError> {
    let shift = Shift::parse(shift_key).map_err(AggregateError::UnknownShift)?;
    let (start, end) = shift.window(date);
    let filter_lower = product_filter.to_lowercase();

    let filtered: Vec<&TestRecord> = records
        .iter()
        .filter(|r| matches!(r.start_time, Some(t) if start <= t && t <= end))
        .filter(|r| product_matches(r.product.as_deref(), &filter_lower))
        .collect();

    for record in &filtered {
        if record.serial.is_empty() {
            return Err(AggregateError::MissingField { field: "serial" });
        }
        if record.board.is_empty() {
            return Err(AggregateError::MissingField { field: "board" });
        }
    }

    // Distinct serials per board over the whole filtered set.
    let test_actual = distinct_serials_per_board(filtered.iter().copied());

    // Distinct failing serials per board. Deduplicate by serial first so a
    // unit with several failing rows counts once.
    let mut seen_failures: HashSet<&str> = HashSet::new();
    let failing = filtered
        .iter()
        .copied()
        .filter(|r| r.result == "FAIL")
        .filter(|r| seen_failures.insert(r.serial.as_str()));
    let failures = distinct_serials_per_board(failing);

    // Left-join failures onto the tested boards; absent board -> 0.
    let rows = test_actual
        .into_iter()
        .map(|(board, tested)| SummaryRow {
            failures: failures.get(board).map_or(0, |s| s.len()),
            test_actual: tested.len(),
            board: board.to_string(),
        })
        .collect();

    Ok(SummaryTable { rows })
}

/// Case-insensitive substring match on the product field. Records without a
/// product value never match, even against an empty filter.
fn product_matches(product: Option<&str>, filter_lower: &str) -> bool {
    match product {
        Some(p) => p.to_lowercase().contains(filter_lower),
        None => false,
    }
}

/// Group records by board and collect the distinct serials in each group.
/// BTreeMap keeps the final row order deterministic (ascending board id).
fn distinct_serials_per_board<'a>(
    records: impl Iterator<Item = &'a TestRecord>,
) -> BTreeMap<&'a str, HashSet<&'a str>> {
    let mut groups: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.board.as_str())
            .or_default()
            .insert(record.serial.as_str());
    }
    groups
}
