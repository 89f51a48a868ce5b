//! JSON output formatter.
//!
//! Formats the report as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::ReportFormatter;
use crate::generation::Generation;
use crate::report::Report;

/// Formats the report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    generations: &'static [Generation],
    contracts: Vec<JsonContract<'a>>,
}

#[derive(Serialize)]
struct JsonContract<'a> {
    name: &'a str,
    cells: &'a [String],
    supported: Vec<Generation>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let contracts = report
            .rows()
            .iter()
            .map(|row| JsonContract {
                name: row.name(),
                cells: row.cells(),
                supported: row.flags().supported().collect(),
            })
            .collect();

        let output = JsonOutput {
            generations: &Generation::ALL,
            contracts,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
