//! File-backed location names.
//!
//! The file is read at most once, on first use. A missing file latches the
//! source into the `Missing` state for its whole lifetime; later calls do
//! not touch the filesystem again.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use geomap_domain::{LocationCatalog, NameSource};
use once_cell::unsync::OnceCell;

pub struct FileNameSource {
    path: PathBuf,
    catalog: OnceCell<LocationCatalog>,
}

impl FileNameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: OnceCell::new(),
        }
    }

    /// Whether the file was absent when it was first needed.
    pub fn is_missing(&self) -> bool {
        self.catalog().is_missing()
    }

    fn load(path: &Path) -> LocationCatalog {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Locations file not found, using placeholder names"
                );
                return LocationCatalog::Missing;
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read locations file, using placeholder names"
                );
                return LocationCatalog::Missing;
            }
        };

        let catalog = LocationCatalog::from_lines(contents.lines());
        if catalog.is_empty() {
            tracing::warn!(
                path = %path.display(),
                "Locations file is empty, using placeholder names"
            );
        } else {
            tracing::info!(
                path = %path.display(),
                count = catalog.len(),
                "Loaded location names"
            );
        }
        catalog
    }
}

impl NameSource for FileNameSource {
    fn catalog(&self) -> &LocationCatalog {
        self.catalog.get_or_init(|| Self::load(&self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::infrastructure::random::FixedRandom;
    use geomap_domain::{EMPTY_PLACEHOLDER, MISSING_PLACEHOLDER};

    fn write_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("locations.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_trimmed_non_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Nile\n\n  Lake Baikal  \r\n   \nMadagascar\n");

        let source = FileNameSource::new(&path);
        let catalog = source.catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.pick(&FixedRandom).as_str(), "Nile");
        assert!(!source.is_missing());
    }

    #[test]
    fn keeps_long_lines() {
        let dir = tempfile::tempdir().unwrap();
        let long = "x".repeat(300);
        let path = write_file(&dir, &format!("{long}\nSahara\n"));

        let source = FileNameSource::new(path);
        let catalog = source.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.pick(&FixedRandom).as_str(), long);
    }

    #[test]
    fn missing_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileNameSource::new(dir.path().join("absent.txt"));

        assert!(source.is_missing());
        assert_eq!(source.catalog().pick(&FixedRandom).as_str(), MISSING_PLACEHOLDER);
    }

    #[test]
    fn missing_state_is_latched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");
        let source = FileNameSource::new(&path);
        assert!(source.is_missing());

        write_file(&dir, "Nile\n");
        assert!(source.is_missing());
        assert_eq!(source.catalog(), &LocationCatalog::Missing);
    }

    #[test]
    fn loaded_names_are_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Nile\n");
        let source = FileNameSource::new(&path);
        assert_eq!(source.catalog().len(), 1);

        fs::remove_file(&path).unwrap();
        assert_eq!(source.catalog().len(), 1);
    }

    #[test]
    fn empty_file_uses_empty_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "\n  \n");
        let source = FileNameSource::new(path);

        assert_eq!(source.catalog(), &LocationCatalog::Empty);
        assert!(!source.is_missing());
        assert_eq!(source.catalog().pick(&FixedRandom).as_str(), EMPTY_PLACEHOLDER);
    }
}
