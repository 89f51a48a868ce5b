//! Display rows and the carry-forward encoding.

use clap::ValueEnum;

use crate::generation::{Generation, GenerationFlags};

/// Cell text for an explicitly supported generation.
pub const SUPPORTED: &str = "X";

/// Cell text for a generation covered by an earlier one.
pub const CARRY_ARROW: &str = "⇠";

/// How a carried-forward generation is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CarryMarker {
    /// `⇠`
    #[default]
    Arrow,
    /// `X<sup>5.1</sup>`, naming the generation carried forward
    Superscript,
}

impl CarryMarker {
    /// Render the marker for a cell covered by `from`.
    pub fn render(self, from: Generation) -> String {
        match self {
            CarryMarker::Arrow => CARRY_ARROW.to_string(),
            CarryMarker::Superscript => format!("{}<sup>{}</sup>", SUPPORTED, from.label()),
        }
    }
}

/// One table row: the package name plus one cell per generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    name: String,
    cells: Vec<String>,
    flags: GenerationFlags,
}

impl DisplayRow {
    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generation cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// The flags this row was built from.
    pub fn flags(&self) -> &GenerationFlags {
        &self.flags
    }

    /// Name followed by the generation cells.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.cells.iter().map(String::as_str))
    }
}

/// Build the display row for a package.
///
/// Scans generations left to right, remembering the last supported one:
/// supported generations render as `X`, later unsupported ones as the
/// carry marker, and unsupported ones before any support stay empty.
/// Returns `None` when every cell would be empty.
pub fn build_row(name: &str, flags: &GenerationFlags, marker: CarryMarker) -> Option<DisplayRow> {
    let (cells, last) = flags.iter().fold(
        (Vec::with_capacity(Generation::ALL.len()), None),
        |(mut cells, last), (generation, supported)| {
            if supported {
                cells.push(SUPPORTED.to_string());
                (cells, Some(generation))
            } else {
                cells.push(last.map(|from| marker.render(from)).unwrap_or_default());
                (cells, last)
            }
        },
    );

    // Nothing was ever supported, so every cell is empty
    if last.is_none() {
        return None;
    }

    Some(DisplayRow {
        name: name.to_string(),
        cells,
        flags: *flags,
    })
}
