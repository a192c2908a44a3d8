//! Content directory scanner.
//!
//! Maps each type digit to its document by file name pattern and lists
//! any other markdown files found alongside them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::TypeDigit;

use super::manifest::Manifest;

/// Result of scanning a content directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Type documents keyed by digit.
    pub types: BTreeMap<TypeDigit, PathBuf>,
    /// Markdown files that match no digit.
    pub strays: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits with no document on disk.
    pub fn missing(&self) -> Vec<TypeDigit> {
        TypeDigit::all()
            .filter(|digit| !self.types.contains_key(digit))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.types.len() + self.strays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Scan `dir` (not recursively) for type documents.
///
/// A missing directory scans as empty.
pub fn scan_directory(dir: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !dir.exists() {
        return result;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || manifest.is_excluded(path) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match digit_for(name, manifest) {
            Some(digit) => {
                result.types.insert(digit, path.to_path_buf());
            }
            None if name.ends_with(".md") => result.strays.push(path.to_path_buf()),
            None => {}
        }
    }

    result
}

/// The digit whose file name under the manifest pattern is `name`.
pub fn digit_for(name: &str, manifest: &Manifest) -> Option<TypeDigit> {
    TypeDigit::all().find(|&digit| manifest.file_name(digit) == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_maps_digits_and_strays() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("type-1.md"), "").unwrap();
        fs::write(dir.path().join("type-9.md"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(result.types.len(), 2);
        assert_eq!(result.strays.len(), 1);
        assert!(result.strays[0].ends_with("README.md"));
        assert_eq!(result.missing().len(), 7);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("old/type-3.md"), "").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_digit_for_custom_pattern() {
        let manifest = Manifest {
            pattern: "enneagram-{digit}.markdown".to_string(),
            ..Manifest::default()
        };

        assert_eq!(digit_for("enneagram-5.markdown", &manifest), TypeDigit::new(5));
        assert_eq!(digit_for("enneagram-10.markdown", &manifest), None);
        assert_eq!(digit_for("type-5.md", &manifest), None);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let result = scan_directory(Path::new("/nonexistent/ennea/content"), &Manifest::default());
        assert!(result.is_empty());
    }
}
