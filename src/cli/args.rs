//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::report::{CarryMarker, OutputFormat, ReportOptions};

/// Append a generation support matrix for a packages directory to a file.
#[derive(Debug, Parser)]
#[command(name = "gentable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose immediate subdirectories are the packages
    #[arg(value_name = "PACKAGES_DIR")]
    pub packages_dir: PathBuf,

    /// File to append the table to (created if missing)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// How generations covered by an earlier one are marked
    #[arg(long, value_enum, default_value_t = CarryMarker::Arrow)]
    pub marker: CarryMarker,

    /// Don't print the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Report options selected on the command line.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            marker: self.marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_two_positionals_with_defaults() {
        let cli = Cli::parse_from(["gentable", "packages", "README.md"]);
        assert_eq!(cli.packages_dir, PathBuf::from("packages"));
        assert_eq!(cli.output, PathBuf::from("README.md"));
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.marker, CarryMarker::Arrow);
        assert!(!cli.quiet);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_format_and_marker() {
        let cli = Cli::parse_from([
            "gentable",
            "--format",
            "json",
            "--marker",
            "superscript",
            "packages",
            "out.json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.report_options().marker, CarryMarker::Superscript);
    }

    #[test]
    fn rejects_single_positional() {
        assert!(Cli::try_parse_from(["gentable", "packages"]).is_err());
    }

    #[test]
    fn rejects_three_positionals() {
        assert!(Cli::try_parse_from(["gentable", "a", "b", "c"]).is_err());
    }
}
