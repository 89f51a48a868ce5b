//! Generation detection for a single package.
//!
//! A package advertises generation support through its `ref` directory:
//! each supported generation has a `dotnet{label}` directory directly
//! beneath it.
//!
//! ```text
//! System.Runtime/
//! └── lib/
//!     └── ref/
//!         ├── dotnet5.1/
//!         └── dotnet5.3/
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GenTableError, Result};
use crate::generation::GenerationFlags;

/// Name of the directory holding the generation markers.
pub const REF_DIR_NAME: &str = "ref";

/// Find the first directory named `ref` anywhere below `package`.
///
/// The search is depth-first with siblings visited in file-name order, so
/// the result is stable for a given tree. `package` itself is never a
/// match. Directory symlinks are followed; any traversal error (permission
/// denied, dangling link, link loop) aborts the search.
pub fn find_ref_dir(package: &Path) -> Result<Option<PathBuf>> {
    let walker = WalkDir::new(package)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| GenTableError::Traversal {
            path: source.path().unwrap_or(package).to_path_buf(),
            source,
        })?;

        if entry.file_type().is_dir() && entry.file_name() == REF_DIR_NAME {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}

/// Probe a package for the generations it supports.
///
/// A package without a `ref` directory supports nothing.
pub fn inspect_generations(package: &Path) -> Result<GenerationFlags> {
    let Some(ref_dir) = find_ref_dir(package)? else {
        tracing::debug!("No {} directory under {}", REF_DIR_NAME, package.display());
        return Ok(GenerationFlags::none());
    };

    tracing::debug!("Using {}", ref_dir.display());
    GenerationFlags::try_from_fn(|generation| is_dir(&ref_dir.join(generation.marker_dir())))
}

/// Whether `path` is a directory. Absence is `false`; anything that exists
/// but cannot be resolved is an error.
fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // A dangling symlink also reports NotFound
            if fs::symlink_metadata(path).is_ok() {
                Err(e.into())
            } else {
                Ok(false)
            }
        }
        Err(e) => Err(e.into()),
    }
}
