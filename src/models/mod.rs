//! Domain types shared across the fetcher, aggregator, and HTTP layers.

pub mod record;
pub mod shift;
pub mod summary;


pub use record::{RawTestRecord, TestRecord};
pub use shift::Shift;
pub use summary::{SummaryRow, SummaryTable};
