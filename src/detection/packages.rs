//! Package directory enumeration.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{GenTableError, Result};

/// A top-level directory under the packages root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDir {
    name: String,
    path: PathBuf,
}

impl PackageDir {
    /// Create a package from its directory path.
    ///
    /// The name is the final path component.
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    /// Package (contract) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path to the package directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// List the immediate child directories of `root`, sorted by name.
///
/// Names are compared ordinally. Regular files are ignored; symlinks to
/// directories count as packages.
pub fn scan_packages(root: &Path) -> Result<Vec<PackageDir>> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(GenTableError::PackagesDirNotFound {
                path: root.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GenTableError::PackagesDirNotFound {
                path: root.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    }

    let mut packages = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        let is_dir = if file_type.is_symlink() {
            fs::metadata(&path)?.is_dir()
        } else {
            file_type.is_dir()
        };

        if is_dir {
            packages.push(PackageDir::new(path));
        }
    }

    packages.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!("Found {} package(s) under {}", packages.len(), root.display());

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(packages: &[PackageDir]) -> Vec<&str> {
        packages.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn package_name_is_last_component() {
        let pkg = PackageDir::new(PathBuf::from("/srv/packages/System.Runtime"));
        assert_eq!(pkg.name(), "System.Runtime");
        assert_eq!(pkg.path(), Path::new("/srv/packages/System.Runtime"));
    }

    #[test]
    fn scan_sorts_by_name() {
        let temp = TempDir::new().unwrap();
        for name in ["System.Xml", "Microsoft.Win32", "System.IO"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let packages = scan_packages(temp.path()).unwrap();
        assert_eq!(
            names(&packages),
            vec!["Microsoft.Win32", "System.IO", "System.Xml"]
        );
    }

    #[test]
    fn scan_uses_ordinal_order() {
        let temp = TempDir::new().unwrap();
        for name in ["b", "B", "a", "A"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let packages = scan_packages(temp.path()).unwrap();
        assert_eq!(names(&packages), vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn scan_ignores_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pkg")).unwrap();
        fs::write(temp.path().join("README.md"), "# packages").unwrap();

        let packages = scan_packages(temp.path()).unwrap();
        assert_eq!(names(&packages), vec!["pkg"]);
    }

    #[test]
    fn scan_does_not_descend() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("outer").join("inner")).unwrap();

        let packages = scan_packages(temp.path()).unwrap();
        assert_eq!(names(&packages), vec!["outer"]);
    }

    #[test]
    fn scan_empty_root() {
        let temp = TempDir::new().unwrap();
        assert!(scan_packages(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn scan_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = scan_packages(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, GenTableError::PackagesDirNotFound { .. }));
    }

    #[test]
    fn scan_file_root_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("packages.txt");
        fs::write(&file, "").unwrap();

        let err = scan_packages(&file).unwrap_err();
        assert!(matches!(err, GenTableError::PackagesDirNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn scan_follows_directory_symlinks() {
        let temp = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target.path(), temp.path().join("linked")).unwrap();

        let packages = scan_packages(temp.path()).unwrap();
        assert_eq!(names(&packages), vec!["linked"]);
    }

    #[cfg(unix)]
    #[test]
    fn scan_dangling_symlink_fails() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("nowhere"), temp.path().join("broken"))
            .unwrap();

        let err = scan_packages(temp.path()).unwrap_err();
        assert!(matches!(err, GenTableError::Io(_)));
    }
}
