//! Report formatters.
//!
//! This module provides formatters for writing a [`Report`] in different
//! formats (markdown table, JSON).

pub mod json;
pub mod markdown;

use clap::ValueEnum;
use std::io::Write;

use super::Report;
use crate::error::Result;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GitHub-flavored markdown table
    #[default]
    Markdown,
    /// Pretty-printed JSON document
    Json,
}

/// Trait for formatting a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Render the report to a string in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Markdown => MarkdownFormatter::new().format(report, &mut buf)?,
        OutputFormat::Json => JsonFormatter::new().format(report, &mut buf)?,
    }
    let text = String::from_utf8(buf).map_err(anyhow::Error::from)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_markdown() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    }

    #[test]
    fn render_empty_markdown() {
        let text = render(&Report::default(), OutputFormat::Markdown).unwrap();
        assert_eq!(
            text,
            "| Contract | 5.1 | 5.2 | 5.3 | 5.4 | 5.5 |\n| -------- | --- | --- | --- | --- | --- |\n"
        );
    }

    #[test]
    fn render_empty_json() {
        let text = render(&Report::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["contracts"].as_array().unwrap().len(), 0);
        assert!(text.ends_with('\n'));
    }
}
