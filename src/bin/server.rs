//! FCT Shift Report server binary.
//!
//! Initializes logging, builds the records-service client from the
//! environment, and serves the report form.
//!
//! # Usage
//!
//! ```bash
//! RECORDS_URL=http://10.16.137.77:9900/tst/nvda/fct/getrecords/ \
//!   cargo run --bin fct-shift-report
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 5001)
//! - `RECORDS_URL`: FCT records service endpoint
//! - `FETCH_TIMEOUT_SECS`: upstream request timeout (default: 10)
//! - `RUST_LOG`: log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fct_shift_report::config::Config;
use fct_shift_report::fetcher::RecordFetcher;
use fct_shift_report::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    info!("Starting FCT Shift Report server");

    let config = Config::from_env();
    info!(records_url = %config.records_url, "records service configured");

    let fetcher = RecordFetcher::new(config.records_url.clone(), config.fetch_timeout)?;
    let state = AppState::new(Arc::new(fetcher));
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
