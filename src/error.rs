use miette::Diagnostic;
use thiserror::Error;

use crate::types::{SectionName, TypeDigit};

/// Main error type for ennea operations
#[derive(Error, Diagnostic, Debug)]
pub enum ContentError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ennea::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ennea::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Type {digit}: malformed document: {message}")]
    #[diagnostic(
        code(ennea::malformed_document),
        help("Type documents start with a ---\\n<yaml>\\n--- frontmatter block")
    )]
    MalformedDocument {
        digit: TypeDigit,
        message: String,
        #[source]
        cause: Option<serde_yaml::Error>,
    },

    #[error("Type {digit}: missing required frontmatter field '{field}'")]
    #[diagnostic(code(ennea::missing_field))]
    MissingRequiredField { digit: TypeDigit, field: &'static str },

    #[error("Type {digit}: malformed section [{section}]: {message}")]
    #[diagnostic(
        code(ennea::malformed_section),
        help("Every line of this section must start with \"- \" or \"<n>. \"")
    )]
    MalformedSection {
        digit: TypeDigit,
        section: String,
        line: String,
        message: String,
    },

    #[error("Type {digit}: schema validation failed: {diagnostic}")]
    #[diagnostic(code(ennea::schema))]
    SchemaValidation { digit: TypeDigit, diagnostic: String },
}

impl ContentError {
    /// The type identifier the error belongs to, if it concerns a document.
    pub fn digit(&self) -> Option<TypeDigit> {
        match self {
            ContentError::MalformedDocument { digit, .. }
            | ContentError::MissingRequiredField { digit, .. }
            | ContentError::MalformedSection { digit, .. }
            | ContentError::SchemaValidation { digit, .. } => Some(*digit),
            ContentError::Io { .. } | ContentError::Parse { .. } => None,
        }
    }

    /// The section the error was raised in, for section-scoped errors.
    pub fn section(&self) -> Option<&str> {
        match self {
            ContentError::MalformedSection { section, .. } => Some(section),
            _ => None,
        }
    }

    pub(crate) fn malformed_section(
        digit: TypeDigit,
        section: SectionName,
        line: &str,
        message: impl Into<String>,
    ) -> Self {
        ContentError::MalformedSection {
            digit,
            section: section.title().to_string(),
            line: line.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
