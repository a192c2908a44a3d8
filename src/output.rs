//! Status lines for the `ennea` binary.
//!
//! Each line is a right-aligned verb followed by its message, in the style
//! Cargo prints. Everything goes to stderr so `ennea show` keeps stdout for
//! the record itself.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::Severity;

const RESET: &str = "\x1b[0m";

/// Verbs are right-aligned to this many columns.
const VERB_COLUMN: usize = 12;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Good,
    Note,
    Caution,
    Bad,
    Faint,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Caution => "\x1b[1;33m",
            Tone::Bad => "\x1b[1;31m",
            Tone::Faint => "\x1b[2m",
        }
    }
}

/// Writes CLI progress to stderr, coloured when asked to be.
pub struct Printer {
    color: bool,
}

impl Printer {
    /// Colour follows whether stderr is a terminal.
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Progress through a command, e.g. `  Validating content/types`.
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Good, verb, message);
    }

    /// Closing line of a command that passed.
    pub fn success(&self, verb: &str, message: &str) {
        self.line(Tone::Good, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Caution, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Bad, verb, message);
    }

    /// Secondary text such as `help:` prefixes.
    pub fn dim(&self, text: &str) -> String {
        self.paint(Tone::Faint, text)
    }

    /// The `warning`/`error` label shown in front of a diagnostic.
    pub fn severity(&self, severity: Severity) -> String {
        let tone = match severity {
            Severity::Warning => Tone::Caution,
            Severity::Error => Tone::Bad,
        };
        self.paint(tone, &severity.to_string())
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", tone.ansi())
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let verb = self.paint(tone, &format!("{verb:>VERB_COLUMN$}"));
        let _ = writeln!(io::stderr().lock(), "{verb} {message}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "type", "types")` is "1 type", any other count takes the plural.
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let noun = if n == 1 { singular } else { pluralized };
    format!("{n} {noun}")
}

/// `path` relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
