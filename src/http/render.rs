//! Server-rendered HTML for the report form and summary table.
//!
//! The page is one self-contained document: the input form at the top, the
//! summary table (when present) below it. Upstream values are escaped before
//! they reach the page.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{Shift, SummaryTable};

/// Escape a value for safe embedding in HTML text or attribute position.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the summary table, or an empty string when there are no rows.
pub fn render_table(table: &SummaryTable) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        "<table class=\"table\">\n\
         <thead><tr><th>PB Number</th><th>Test Actual</th><th>Failures</th></tr></thead>\n\
         <tbody>\n",
    );
    for row in &table.rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.board),
            row.test_actual,
            row.failures,
        );
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Render the full page: form populated with the submitted inputs, plus the
/// table HTML (may be empty).
pub fn render_page(
    product_name: &str,
    selected_date: NaiveDate,
    shift: Shift,
    table_html: &str,
) -> String {
    let mut options = String::new();
    for s in Shift::ALL {
        let selected = if s == shift { " selected" } else { "" };
        let _ = writeln!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            s.key(),
            selected,
            s.label(),
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>FCT Shift Report</title></head>\n\
         <body>\n\
         <h1>FCT Shift Report</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <label>Product: <input type=\"text\" name=\"product_name\" value=\"{product}\"></label>\n\
         <label>Date: <input type=\"date\" name=\"date\" value=\"{date}\"></label>\n\
         <label>Shift: <select name=\"shift\">\n{options}</select></label>\n\
         <button type=\"submit\">Query</button>\n\
         </form>\n\
         {table}\n\
         </body>\n\
         </html>",
        product = escape_html(product_name),
        date = selected_date.format("%Y-%m-%d"),
        options = options,
        table = table_html,
    )
}

/// Render a minimal error page for rejected requests.
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>FCT Shift Report</title></head>\n\
         <body>\n\
         <h1>FCT Shift Report</h1>\n\
         <p class=\"error\">{}</p>\n\
         <p><a href=\"/\">Back to the form</a></p>\n\
         </body>\n\
         </html>",
        escape_html(message),
    )
}
