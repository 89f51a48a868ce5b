//! Package discovery and generation detection.
//!
//! - [`packages`] - Enumerates the package directories under a root
//! - [`generations`] - Locates a package's `ref` directory and probes it for
//!   generation markers

pub mod generations;
pub mod packages;

pub use generations::{find_ref_dir, inspect_generations, REF_DIR_NAME};
pub use packages::{scan_packages, PackageDir};
