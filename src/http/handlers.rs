//! HTTP handlers for the report form.
//!
//! Each handler parses its inputs, delegates to the fetcher and the service
//! layer, and renders the page. Fetch failures degrade to an empty table;
//! invalid inputs are explicit rejections.

use axum::{
    extract::State,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::AppError;
use super::render;
use super::state::AppState;
use crate::models::Shift;
use crate::services;

/// Form fields for a report request. Every field is optional on the wire
/// and falls back to its documented default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records_url: String,
}

/// GET /health
///
/// Liveness probe; reports the configured upstream endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records_url: state.fetcher.records_url().to_string(),
    })
}

/// GET /
///
/// Render the empty form: today's date, full-day shift, no product filter.
pub async fn show_form() -> Html<String> {
    let today = Local::now().date_naive();
    Html(render::render_page("", today, Shift::FullDay, ""))
}

/// POST /
///
/// Run one report: fetch the full day's records, aggregate them to the
/// selected shift and product, and re-render the page with the result.
pub async fn run_report(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ReportForm>,
) -> Result<Html<String>, AppError> {
    let shift_key = form.shift.as_deref().unwrap_or(Shift::FullDay.key());
    let shift = Shift::parse(shift_key)
        .map_err(|key| AppError::BadRequest(format!("unknown shift key: {key:?}")))?;

    let date = match form.date.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("invalid date: {s:?}")))?,
        None => Local::now().date_naive(),
    };

    info!(
        product = %form.product_name,
        date = %date,
        shift = shift.key(),
        "report requested"
    );

    let records = state.fetcher.fetch(date).await;
    let table = services::aggregate(&records, date, shift.key(), &form.product_name)?;

    let table_html = render::render_table(&table);
    Ok(Html(render::render_page(
        &form.product_name,
        date,
        shift,
        &table_html,
    )))
}
