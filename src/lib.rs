//! gentable - Generation support matrix for a directory of packages.
//!
//! gentable walks a packages directory, works out which platform
//! generations (`5.1` through `5.5`) each package ships a reference
//! variant for, and appends the result to a file as a markdown table.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Package discovery and `ref` directory inspection
//! - [`error`] - Error types and result aliases
//! - [`generation`] - Generation labels and per-package support flags
//! - [`output`] - Appending the rendered report to a file
//! - [`report`] - Row encoding and report formatting
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gentable::report::{generate_report, render, OutputFormat, ReportOptions};
//!
//! let report = generate_report(Path::new("packages"), &ReportOptions::default())?;
//! let markdown = render(&report, OutputFormat::Markdown)?;
//! gentable::output::append_to_file(Path::new("README.md"), &markdown)?;
//! # Ok::<(), gentable::GenTableError>(())
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod generation;
pub mod output;
pub mod report;

pub use error::{GenTableError, Result};
