//! Generation support report.
//!
//! This module turns a packages directory into a [`Report`]:
//! - [`row`] - Carry-forward encoding of generation flags into display rows
//! - [`table`] - Markdown table rendering
//! - [`format`] - Report formatters (markdown, JSON)
//!
//! # Example
//!
//! ```
//! use gentable::generation::GenerationFlags;
//! use gentable::report::{build_row, CarryMarker};
//!
//! let flags = GenerationFlags::new([true, false, true, false, false]);
//! let row = build_row("System.Runtime", &flags, CarryMarker::Arrow).unwrap();
//! assert_eq!(row.cells(), ["X", "⇠", "X", "⇠", "⇠"]);
//! ```

pub mod format;
pub mod row;
pub mod table;

pub use format::{render, JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter};
pub use row::{build_row, CarryMarker, DisplayRow};
pub use table::MarkdownTable;

use std::path::Path;

use crate::detection::{inspect_generations, scan_packages};
use crate::error::Result;
use crate::generation::Generation;

/// Header of the package-name column.
pub const CONTRACT_HEADER: &str = "Contract";

/// Options controlling how a report is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Marker for carried-forward generations.
    pub marker: CarryMarker,
}

/// Qualifying packages, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<DisplayRow>,
    scanned: usize,
}

impl Report {
    /// Create a report from rows that are already filtered and sorted.
    pub fn new(rows: Vec<DisplayRow>, scanned: usize) -> Self {
        Self { rows, scanned }
    }

    /// Column headers: `Contract` followed by each generation label.
    pub fn headers() -> Vec<&'static str> {
        std::iter::once(CONTRACT_HEADER)
            .chain(Generation::ALL.iter().map(|g| g.label()))
            .collect()
    }

    /// Rows for packages supporting at least one generation.
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Number of package directories examined, including omitted ones.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Number of packages omitted for lack of any generation support.
    pub fn omitted(&self) -> usize {
        self.scanned - self.rows.len()
    }
}

/// Scan `packages_dir` and build the report.
///
/// Fails on the first filesystem error; there is no partial result.
pub fn generate_report(packages_dir: &Path, options: &ReportOptions) -> Result<Report> {
    let packages = scan_packages(packages_dir)?;
    let scanned = packages.len();

    let mut rows = Vec::with_capacity(scanned);
    for package in &packages {
        let flags = inspect_generations(package.path())?;
        match build_row(package.name(), &flags, options.marker) {
            Some(row) => rows.push(row),
            None => tracing::debug!("Omitting {}: no supported generations", package.name()),
        }
    }

    tracing::info!(
        "Built {} row(s) from {} package(s) in {}",
        rows.len(),
        scanned,
        packages_dir.display()
    );

    Ok(Report::new(rows, scanned))
}
