//! Markdown output formatter.

use std::io::Write;

use super::ReportFormatter;
use crate::report::{MarkdownTable, Report};

/// Formats the report as a markdown table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let mut table = MarkdownTable::new(Report::headers());
        for row in report.rows() {
            table.add_row(row.columns());
        }
        writer.write_all(table.render().as_bytes())
    }
}
