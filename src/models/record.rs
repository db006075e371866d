//! Test record types and upstream coercion.
//!
//! The records service returns loosely shaped JSON objects; every field may
//! be absent. [`RawTestRecord`] mirrors that shape for deserialization, and
//! [`TestRecord`] is the coerced form the rest of the crate works with.
//! Coercion happens once, at the fetch boundary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the records service for `START_TIME`.
pub const UPSTREAM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One record as the upstream service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestRecord {
    /// Unit serial identifier
    #[serde(rename = "NVSN")]
    pub serial: Option<String>,
    /// Board / panel identifier
    #[serde(rename = "NVPBR")]
    pub board: Option<String>,
    /// Product part number
    #[serde(rename = "NVPN")]
    pub product: Option<String>,
    /// Test start timestamp, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "START_TIME")]
    pub start_time: Option<String>,
    /// Result status ("PASS", "FAIL", possibly others)
    #[serde(rename = "RESULT")]
    pub result: Option<String>,
}

/// One coerced test record.
///
/// `start_time` is `None` when the upstream timestamp was missing or
/// unparseable; such records fail every window comparison and drop out of
/// time filtering without aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    pub serial: String,
    pub board: String,
    pub product: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub result: String,
}

impl From<RawTestRecord> for TestRecord {
    fn from(raw: RawTestRecord) -> Self {
        let start_time = raw
            .start_time
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, UPSTREAM_TIME_FORMAT).ok());

        Self {
            serial: raw.serial.unwrap_or_default(),
            board: raw.board.unwrap_or_default(),
            product: raw.product,
            start_time,
            result: raw.result.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start_time: Option<&str>) -> RawTestRecord {
        RawTestRecord {
            serial: Some("S1".to_string()),
            board: Some("B1".to_string()),
            product: Some("NVPN-X".to_string()),
            start_time: start_time.map(String::from),
            result: Some("PASS".to_string()),
        }
    }

    #[test]
    fn coerces_valid_timestamp() {
        let rec = TestRecord::from(raw(Some("2024-01-01 10:00:00")));
        let ts = rec.start_time.expect("timestamp should parse");
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00");
    }

    #[test]
    fn unparseable_timestamp_becomes_none() {
        let rec = TestRecord::from(raw(Some("not-a-time")));
        assert_eq!(rec.start_time, None);
    }

    #[test]
    fn missing_timestamp_becomes_none() {
        let rec = TestRecord::from(raw(None));
        assert_eq!(rec.start_time, None);
    }

    #[test]
    fn missing_product_stays_none() {
        let rec = TestRecord::from(RawTestRecord {
            serial: None,
            board: None,
            product: None,
            start_time: None,
            result: None,
        });
        assert_eq!(rec.product, None);
        assert_eq!(rec.serial, "");
        assert_eq!(rec.board, "");
    }
}
