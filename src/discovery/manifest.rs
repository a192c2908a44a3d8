//! Project manifest (`ennea.yaml`) parsing.
//!
//! Every key is optional; a project without a manifest uses the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::registry::{DEFAULT_PATTERN, DIGIT_PLACEHOLDER};

/// Project configuration loaded from `ennea.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory holding the type documents, relative to the project root.
    pub content: PathBuf,

    /// File name pattern for type documents; must contain `{digit}`.
    pub pattern: String,

    /// Make `ennea validate` fail on warnings as well as errors.
    pub deny_warnings: bool,

    /// Patterns to skip while scanning.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content/types"),
            pattern: DEFAULT_PATTERN.to_string(),
            deny_warnings: false,
            excludes: vec![],
        }
    }
}

/// Command-line values that take precedence over the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub content: Option<PathBuf>,
    pub pattern: Option<String>,
}

impl Manifest {
    /// Load a manifest from an `ennea.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| ContentError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check ennea.yaml syntax".to_string()),
        })?;
        manifest.check_pattern()?;
        Ok(manifest)
    }

    /// Apply command-line overrides.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(content) = &overrides.content {
            self.content = content.clone();
        }
        if let Some(pattern) = &overrides.pattern {
            self.pattern = pattern.clone();
        }
        self.check_pattern()
    }

    fn check_pattern(&self) -> Result<()> {
        if self.pattern.contains(DIGIT_PLACEHOLDER) {
            Ok(())
        } else {
            Err(ContentError::Parse {
                message: format!("pattern '{}' has no {} placeholder", self.pattern, DIGIT_PLACEHOLDER),
                help: Some(format!("Try pattern: {}", DEFAULT_PATTERN)),
            })
        }
    }

    /// The file name a digit's document should have.
    pub fn file_name(&self, digit: crate::types::TypeDigit) -> String {
        self.pattern.replace(DIGIT_PLACEHOLDER, &digit.to_string())
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Render the manifest as YAML for `ennea init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ContentError::Parse {
            message: format!("Failed to render manifest: {}", e),
            help: None,
        })
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
content: docs/enneagram
pattern: enneagram-{digit}.md
deny_warnings: true
excludes:
  - "*.bak"
  - "**/drafts/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.content, PathBuf::from("docs/enneagram"));
        assert_eq!(manifest.pattern, "enneagram-{digit}.md");
        assert!(manifest.deny_warnings);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/drafts/*"]);
    }

    #[test]
    fn test_pattern_needs_placeholder() {
        let err = Manifest::parse("pattern: types.md").unwrap_err();
        assert!(err.to_string().contains("{digit}"));
    }

    #[test]
    fn test_overrides_win() {
        let mut manifest = Manifest::parse("content: a\npattern: t{digit}.md").unwrap();
        manifest
            .apply(&Overrides {
                content: Some(PathBuf::from("b")),
                pattern: None,
            })
            .unwrap();

        assert_eq!(manifest.content, PathBuf::from("b"));
        assert_eq!(manifest.pattern, "t{digit}.md");
    }

    #[test]
    fn test_excludes() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string(), "**/drafts/*".to_string()],
            ..Manifest::default()
        };

        assert!(manifest.is_excluded(Path::new("content/type-1.md.bak")));
        assert!(manifest.is_excluded(Path::new("content/drafts/type-2.md")));
        assert!(!manifest.is_excluded(Path::new("content/type-2.md")));
    }

    #[test]
    fn test_yaml_round_trips_defaults() {
        let yaml = Manifest::default().to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), Manifest::default());
    }
}
