//! Show command implementation.
//!
//! Prints one validated record to stdout as JSON or YAML.

use clap::{Args, ValueEnum};

use crate::error::{ContentError, Result};
use crate::output::Printer;
use crate::types::{TypeDigit, TypeRecord};
use crate::validation::print_diagnostics;

use super::ProjectArgs;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

/// Print one validated type record
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Type digit (1-9)
    pub digit: TypeDigit,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let registry = args.project.discover()?.into_registry()?;
    let loaded = registry.load(args.digit)?;

    if !loaded.warnings.is_empty() {
        print_diagnostics(&loaded.warnings, printer);
    }

    println!("{}", render(&loaded.record, args.format)?);
    Ok(())
}

/// Serialize a record in the requested format.
pub fn render(record: &TypeRecord, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(record).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(record).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| ContentError::Parse {
        message: format!("Failed to render type {}: {}", record.digit, message),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentBlock, TypeSections};

    fn record() -> TypeRecord {
        TypeRecord {
            digit: TypeDigit::new(5).unwrap(),
            name: "The Investigator".to_string(),
            brief_description: "Perceptive".to_string(),
            top_priority: ContentBlock::new("Competence", "Understanding the world"),
            secondary_desires: vec![],
            top_fear: ContentBlock::new("Helplessness", "Being overwhelmed"),
            secondary_fears: vec![],
            sections: TypeSections::default(),
        }
    }

    #[test]
    fn test_render_json_uses_camel_case() {
        let json = render(&record(), Format::Json).unwrap();

        assert!(json.contains("\"briefDescription\": \"Perceptive\""));
        assert!(json.contains("\"digit\": \"5\""));
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&record(), Format::Yaml).unwrap();
        assert!(yaml.contains("name: The Investigator"));
    }
}
