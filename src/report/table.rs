//! Markdown table rendering.

/// A GitHub-flavored markdown table.
///
/// The separator row uses one dash per character of the matching header
/// cell; cells are not padded.
#[derive(Debug)]
pub struct MarkdownTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    /// Create a new table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table, one line per row, each ending in `\n`.
    pub fn render(&self) -> String {
        let mut output = String::new();

        render_row(&mut output, &self.headers);

        let separator: Vec<String> = self
            .headers
            .iter()
            .map(|h| "-".repeat(h.chars().count()))
            .collect();
        render_row(&mut output, &separator);

        for row in &self.rows {
            render_row(&mut output, row);
        }

        output
    }
}

fn render_row(output: &mut String, cells: &[String]) {
    output.push_str("| ");
    output.push_str(&cells.join(" | "));
    output.push_str(" |\n");
}
