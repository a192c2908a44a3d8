//! Sections command implementation.
//!
//! Prints how a file's body is segmented, which is the first thing to
//! check when a section comes out empty.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ContentError, Result};
use crate::parser::{extract_frontmatter, segment_sections, SectionMap};

/// Print the section map of a markdown file
#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Markdown file to segment
    pub file: PathBuf,
}

pub fn run(args: SectionsArgs) -> Result<()> {
    let source = std::fs::read_to_string(&args.file).map_err(|e| ContentError::Io {
        path: args.file.clone(),
        message: format!("Failed to read file: {}", e),
    })?;

    print!("{}", describe(&segment_file(&source)));
    Ok(())
}

/// Segment the body after the frontmatter, or the whole file when it has none.
pub fn segment_file(source: &str) -> SectionMap {
    match extract_frontmatter(source) {
        Ok(frontmatter) => segment_sections(frontmatter.body(source)),
        Err(_) => segment_sections(source),
    }
}

/// One line per section: header line, title, kind and line count.
pub fn describe(map: &SectionMap) -> String {
    map.iter()
        .map(|section| {
            let kind = section.name().map_or("unknown", |name| name.kind().name());
            format!(
                "{:>4}  {:<46} {:<20} {}\n",
                section.line,
                format!("[{}]", section.title),
                kind,
                section.lines.len()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_kinds() {
        let map = segment_file("---\ntypeNumber: 1\n---\n[Wing Types]\nType 9: A Wing (B): c\n[Odd]\nx\ny\n");

        let out = describe(&map);
        let rows: Vec<&str> = out.lines().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("[Wing Types]") && rows[0].contains("wing-types"));
        assert!(rows[1].contains("[Odd]") && rows[1].contains("unknown") && rows[1].ends_with('2'));
    }

    #[test]
    fn test_file_without_frontmatter_is_segmented_whole() {
        let map = segment_file("[Type Summary]\nCalm.\n");
        assert_eq!(map.len(), 1);
    }
}
