//! Environment-driven process configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (default: 0.0.0.0)
//! - `PORT`: bind port (default: 5001)
//! - `RECORDS_URL`: FCT records service endpoint
//! - `FETCH_TIMEOUT_SECS`: upstream request timeout (default: 10)
//! - `RUST_LOG`: log level filtering

use std::env;
use std::time::Duration;

/// Default records endpoint on the plant network.
const DEFAULT_RECORDS_URL: &str = "http://10.16.137.77:9900/tst/nvda/fct/getrecords/";

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub records_url: String,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5001);
        let records_url =
            env::var("RECORDS_URL").unwrap_or_else(|_| DEFAULT_RECORDS_URL.to_string());
        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            host,
            port,
            records_url,
            fetch_timeout,
        }
    }

    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
