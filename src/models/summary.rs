//! Summary output types.

use serde::{Deserialize, Serialize};

/// Per-board counts for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Board / panel identifier ("PB Number")
    pub board: String,
    /// Distinct unit serials tested on this board within the window
    pub test_actual: usize,
    /// Distinct unit serials with a failing result; 0 when none
    pub failures: usize,
}

/// The full report table, sorted ascending by board identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
