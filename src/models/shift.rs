//! Shift window enumeration.
//!
//! Each shift maps to a fixed start/end time of day; combined with the
//! selected date they give the absolute inclusive bounds used by the
//! aggregator. The set of shifts is closed: anything outside the three keys
//! is rejected, never defaulted.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A named shift window on the manufacturing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    DayShift,
    NightShift,
    #[default]
    FullDay,
}

impl Shift {
    /// All shifts, in form display order.
    pub const ALL: [Shift; 3] = [Shift::FullDay, Shift::DayShift, Shift::NightShift];

    /// Parse a form key into a shift. Returns the unknown key on failure so
    /// the caller can report it.
    pub fn parse(key: &str) -> Result<Self, String> {
        match key {
            "day_shift" => Ok(Shift::DayShift),
            "night_shift" => Ok(Shift::NightShift),
            "full_day" => Ok(Shift::FullDay),
            other => Err(other.to_string()),
        }
    }

    /// Form key for this shift.
    pub fn key(&self) -> &'static str {
        match self {
            Shift::DayShift => "day_shift",
            Shift::NightShift => "night_shift",
            Shift::FullDay => "full_day",
        }
    }

    /// Human-readable label for the form.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::DayShift => "Day shift (00:00:01 - 15:00:00)",
            Shift::NightShift => "Night shift (15:00:01 - 22:29:59)",
            Shift::FullDay => "Full day",
        }
    }

    fn bounds(&self) -> (NaiveTime, NaiveTime) {
        let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        match self {
            Shift::DayShift => (t(0, 0, 1), t(15, 0, 0)),
            Shift::NightShift => (t(15, 0, 1), t(22, 29, 59)),
            Shift::FullDay => (t(0, 0, 1), t(23, 59, 59)),
        }
    }

    /// Absolute inclusive window for this shift on the given date.
    pub fn window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let (start, end) = self.bounds();
        (date.and_time(start), date.and_time(end))
    }
}
