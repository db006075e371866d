//! Application state for the HTTP server.

use std::sync::Arc;

use crate::fetcher::RecordFetcher;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote records service
    pub fetcher: Arc<RecordFetcher>,
}

impl AppState {
    /// Create a new application state around the given fetcher.
    pub fn new(fetcher: Arc<RecordFetcher>) -> Self {
        Self { fetcher }
    }
}
