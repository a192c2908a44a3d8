//! Where raw type documents come from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ContentError, Result};
use crate::types::TypeDigit;

/// Placeholder replaced by the type digit in file name patterns.
pub const DIGIT_PLACEHOLDER: &str = "{digit}";

/// File name pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "type-{digit}.md";

/// Fetches the raw markdown for a type.
pub trait ContentSource: Send + Sync {
    fn fetch(&self, digit: TypeDigit) -> Result<String>;
}

/// Reads `<dir>/<pattern>` from disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    pattern: String,
}

impl DirectorySource {
    /// Source over `dir` using the default `type-{digit}.md` pattern.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Use a custom file name pattern. It must contain `{digit}`.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(DIGIT_PLACEHOLDER) {
            return Err(ContentError::Parse {
                message: format!("file pattern '{}' has no {} placeholder", pattern, DIGIT_PLACEHOLDER),
                help: Some(format!("Try '{}'", DEFAULT_PATTERN)),
            });
        }
        self.pattern = pattern;
        Ok(self)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The file a digit's document is read from.
    pub fn path_for(&self, digit: TypeDigit) -> PathBuf {
        self.dir
            .join(self.pattern.replace(DIGIT_PLACEHOLDER, &digit.to_string()))
    }
}

impl ContentSource for DirectorySource {
    fn fetch(&self, digit: TypeDigit) -> Result<String> {
        let path = self.path_for(digit);
        std::fs::read_to_string(&path).map_err(|e| ContentError::Io {
            path,
            message: format!("Failed to read type document: {}", e),
        })
    }
}

/// Documents held in memory, for hosts that embed their content.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<TypeDigit, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, digit: TypeDigit, source: impl Into<String>) -> &mut Self {
        self.documents.insert(digit, source.into());
        self
    }
}

impl FromIterator<(TypeDigit, String)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (TypeDigit, String)>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl ContentSource for MemorySource {
    fn fetch(&self, digit: TypeDigit) -> Result<String> {
        self.documents
            .get(&digit)
            .cloned()
            .ok_or_else(|| ContentError::Io {
                path: PathBuf::from(DEFAULT_PATTERN.replace(DIGIT_PLACEHOLDER, &digit.to_string())),
                message: "no document registered for this type".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn digit(n: u8) -> TypeDigit {
        TypeDigit::new(n).unwrap()
    }

    #[test]
    fn test_directory_source_reads_pattern() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("enneagram-4.md"), "four").unwrap();

        let source = DirectorySource::new(dir.path())
            .with_pattern("enneagram-{digit}.md")
            .unwrap();

        assert_eq!(source.fetch(digit(4)).unwrap(), "four");
    }

    #[test]
    fn test_directory_source_missing_file_is_io() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        let err = source.fetch(digit(2)).unwrap_err();
        match err {
            ContentError::Io { path, .. } => assert!(path.ends_with("type-2.md")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_pattern_without_placeholder() {
        let err = DirectorySource::new(".").with_pattern("types.md").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new();
        source.insert(digit(7), "seven");

        assert_eq!(source.fetch(digit(7)).unwrap(), "seven");
        assert!(source.fetch(digit(8)).is_err());
    }
}
