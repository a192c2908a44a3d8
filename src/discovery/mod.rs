//! Project discovery: manifest loading and content scanning.
//!
//! # Example
//!
//! ```ignore
//! use ennea::discovery::discover;
//!
//! let result = discover(".")?;
//! println!("Found {} type documents", result.scan.types.len());
//!
//! let registry = result.into_registry()?;
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::{DirectorySource, TypeRegistry};

pub use manifest::{Manifest, Overrides};
pub use scanner::{digit_for, scan_directory, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "ennea.yaml";

/// Result of discovering type documents in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no ennea.yaml found).
    pub manifest: Manifest,

    /// Whether an ennea.yaml manifest was found.
    pub has_manifest: bool,

    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// The content directory, resolved against the project root.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.content)
    }

    /// A source reading documents from the content directory.
    pub fn source(&self) -> Result<DirectorySource> {
        DirectorySource::new(self.content_dir()).with_pattern(self.manifest.pattern.clone())
    }

    /// Build a registry over the discovered content.
    pub fn into_registry(self) -> Result<TypeRegistry> {
        Ok(TypeRegistry::new(self.source()?))
    }
}

/// Discover the type documents of a project.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    discover_with(root, &Overrides::default())
}

/// Discover with command-line overrides applied on top of the manifest.
pub fn discover_with(root: impl AsRef<Path>, overrides: &Overrides) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (mut manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };
    manifest.apply(overrides)?;

    let scan = scan_directory(&root.join(&manifest.content), &manifest);
    tracing::debug!(
        root = %root.display(),
        types = scan.types.len(),
        strays = scan.strays.len(),
        "scanned content directory"
    );

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDigit;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
        assert_eq!(result.content_dir(), dir.path().join("content/types"));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ennea.yaml"), "content: types\n").unwrap();
        fs::create_dir_all(dir.path().join("types")).unwrap();
        fs::write(dir.path().join("types/type-2.md"), "").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.scan.types.len(), 1);
        assert!(result.scan.types.contains_key(&TypeDigit::new(2).unwrap()));
    }

    #[test]
    fn test_overrides_redirect_scan() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("elsewhere")).unwrap();
        fs::write(dir.path().join("elsewhere/t4.md"), "").unwrap();

        let overrides = Overrides {
            content: Some(PathBuf::from("elsewhere")),
            pattern: Some("t{digit}.md".to_string()),
        };
        let result = discover_with(dir.path(), &overrides).unwrap();

        assert_eq!(result.scan.types.len(), 1);
        assert_eq!(result.source().unwrap().pattern(), "t{digit}.md");
    }

    #[test]
    fn test_invalid_manifest_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ennea.yaml"), "deny_warnings: [not, a, bool]").unwrap();

        assert!(discover(dir.path()).is_err());
    }
}
