//! Diagnostic types for validation results.

use std::fmt;

use crate::types::TypeDigit;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic about one type document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "ennea::parse::dropped-line").
    pub code: String,
    pub message: String,
    pub help: Option<String>,
    /// Document the diagnostic belongs to, once known.
    pub digit: Option<TypeDigit>,
    /// Section title the diagnostic was raised in.
    pub section: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    fn with_severity(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            help: None,
            digit: None,
            section: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn for_digit(mut self, digit: TypeDigit) -> Self {
        self.digit = Some(digit);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(digit) = self.digit {
            write!(f, "type {}: ", digit)?;
        }
        if let Some(section) = &self.section {
            write!(f, "[{}] ", section)?;
        }
        f.write_str(&self.message)
    }
}

/// Collects diagnostics for one or more documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Stamp every diagnostic that lacks a digit with this one.
    pub fn attribute_to(&mut self, digit: TypeDigit) {
        for d in &mut self.diagnostics {
            d.digit.get_or_insert(digit);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_warning_diagnostic() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("ennea::test", "line dropped"));

        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert!(!result.is_ok());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::error("ennea::a", "error a"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::warning("ennea::b", "warning b"));

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
    }

    #[test]
    fn test_attribute_to_keeps_existing_digit() {
        let one = TypeDigit::new(1).unwrap();
        let two = TypeDigit::new(2).unwrap();

        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("ennea::a", "a"));
        result.push(Diagnostic::warning("ennea::b", "b").for_digit(two));
        result.attribute_to(one);

        let digits: Vec<_> = result.iter().map(|d| d.digit).collect();
        assert_eq!(digits, vec![Some(one), Some(two)]);
    }

    #[test]
    fn test_display_includes_location() {
        let d = Diagnostic::warning("ennea::parse::dropped-line", "dropped \"• Typo: x\"")
            .in_section("Line Types")
            .for_digit(TypeDigit::new(3).unwrap());
        assert_eq!(d.to_string(), "type 3: [Line Types] dropped \"• Typo: x\"");
    }
}
