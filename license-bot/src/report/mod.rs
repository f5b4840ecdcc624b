//! Run reporting.
//!
//! Collects one row per candidate repository plus aggregate counts, and
//! renders the rows as a plain two-column table.

mod run_summary;

pub use run_summary::{ReportRow, RunSummary, NO_LICENSE};

use comfy_table::{presets::NOTHING, ContentArrangement, Table};

/// Renders the candidate rows as a two-column, left-aligned table:
/// repository name and license identifier (or "No License").
#[must_use]
pub fn render_report(rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for row in rows {
        table.add_row(vec![row.name.as_str(), row.license_label.as_str()]);
    }

    table.to_string()
}
