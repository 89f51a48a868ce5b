//! Writing the rendered report.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Append `text` to the file at `path`, creating it if needed.
///
/// Existing content is left untouched.
pub fn append_to_file(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    tracing::debug!("Appended {} byte(s) to {}", text.len(), path.display());
    Ok(())
}
