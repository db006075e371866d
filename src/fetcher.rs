//! Outbound client for the remote FCT records service.
//!
//! One request per report: the full calendar day is fetched regardless of the
//! selected shift, and shift narrowing happens downstream in the aggregator.
//! Any failure (connection, timeout, non-200 status, malformed body) yields
//! an empty record set; the caller cannot distinguish "no data" from "fetch
//! failed" and must not try to.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{RawTestRecord, TestRecord};

/// Request body for the records endpoint.
#[derive(Debug, Clone, Serialize)]
struct RecordsQuery {
    start: String,
    end: String,
}

impl RecordsQuery {
    /// Full-day range for the given date, `00:00:01` through `23:59:59`.
    fn full_day(date: NaiveDate) -> Self {
        Self {
            start: format!("{} 00:00:01", date.format("%Y-%m-%d")),
            end: format!("{} 23:59:59", date.format("%Y-%m-%d")),
        }
    }
}

/// Response envelope from the records endpoint.
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    fct_sfc_records: Vec<RawTestRecord>,
}

/// Client for the records service.
#[derive(Debug, Clone)]
pub struct RecordFetcher {
    client: reqwest::Client,
    records_url: String,
}

impl RecordFetcher {
    /// Build a fetcher for the given endpoint with a bounded request timeout.
    pub fn new(records_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build records client")?;

        Ok(Self {
            client,
            records_url: records_url.into(),
        })
    }

    /// Endpoint this fetcher talks to.
    pub fn records_url(&self) -> &str {
        &self.records_url
    }

    /// Fetch all records for the given date, or an empty set on any failure.
    ///
    /// Fail-soft policy: errors are logged and mapped to an empty result
    /// here, in one place, and never propagate to the handler.
    pub async fn fetch(&self, date: NaiveDate) -> Vec<TestRecord> {
        match self.try_fetch(date).await {
            Ok(records) => {
                info!(date = %date, count = records.len(), "records fetched");
                records
            }
            Err(e) => {
                warn!(date = %date, error = %e, "records fetch failed, returning empty set");
                Vec::new()
            }
        }
    }

    /// Fallible fetch path: one POST covering the full day.
    async fn try_fetch(&self, date: NaiveDate) -> Result<Vec<TestRecord>> {
        let query = RecordsQuery::full_day(date);

        let response = self
            .client
            .post(&self.records_url)
            .json(&query)
            .send()
            .await
            .context("records request failed")?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            anyhow::bail!("records service returned status {status}");
        }

        let body: RecordsResponse = response
            .json()
            .await
            .context("malformed records response body")?;

        Ok(body.fct_sfc_records.into_iter().map(TestRecord::from).collect())
    }
}
