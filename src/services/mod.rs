//! Service layer: pure data-shaping logic between the fetcher and the HTTP
//! handlers. No I/O happens here.

pub mod aggregate;

#[cfg(test)]
mod aggregate_tests;

pub use aggregate::{aggregate, AggregateError};
