//! # FCT Shift Report
//!
//! Web service for per-shift functional test (FCT) reporting on the
//! manufacturing line. An operator picks a date, a shift window, and an
//! optional product filter; the service pulls that day's raw test records
//! from the plant records service and renders per-board counts of distinct
//! units tested and distinct failing units.
//!
//! ## Architecture
//!
//! - [`models`]: domain types (test records, shift windows, summary rows)
//! - [`fetcher`]: outbound client for the remote records service
//! - [`services`]: pure filtering and aggregation logic
//! - [`http`]: axum-based form handlers and page rendering
//! - [`config`]: environment-driven process configuration
//!
//! All data is request-scoped: fetched, aggregated, rendered, discarded.

pub mod config;

pub mod fetcher;

pub mod models;

pub mod services;

pub mod http;
