//! Generate command implementation.
//!
//! Scans the packages directory, renders the report, and appends it to the
//! output file. The report is fully rendered before the file is opened, so
//! a failed scan leaves the output untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::output::append_to_file;
use crate::report::{generate_report, render, OutputFormat, ReportOptions};

use super::command::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    packages_dir: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    options: ReportOptions,
    quiet: bool,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(packages_dir: &Path, output: &Path) -> Self {
        Self {
            packages_dir: packages_dir.to_path_buf(),
            output: output.to_path_buf(),
            format: OutputFormat::default(),
            options: ReportOptions::default(),
            quiet: false,
        }
    }

    /// Create a command from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.packages_dir, &cli.output)
            .with_format(cli.format)
            .with_options(cli.report_options())
            .with_quiet(cli.quiet)
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the report options.
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Suppress the summary line.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Command for GenerateCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let report = generate_report(&self.packages_dir, &self.options)?;
        let text = render(&report, self.format)?;

        append_to_file(&self.output, &text)?;

        if !self.quiet {
            writeln!(
                out,
                "Wrote {} contract row(s) to {}",
                report.rows().len(),
                self.output.display()
            )?;
        }

        Ok(CommandResult::success())
    }
}
