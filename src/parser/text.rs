//! Free-text sections.

/// Join a section's lines into one block of text.
///
/// The segmenter has already removed blank lines, so paragraph breaks do
/// not survive: every line is joined with a single newline.
pub fn parse_text(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        source.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_joins_lines() {
        let text = parse_text(&lines("Nines seek peace.\nThey avoid conflict."));
        assert_eq!(text, "Nines seek peace.\nThey avoid conflict.");
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(parse_text(&[]), "");
    }

    #[test]
    fn test_paragraphs_collapse_after_segmentation() {
        let map = crate::parser::segment_sections("[Long Description]\nFirst paragraph.\n\nSecond paragraph.");
        let text = parse_text(map.lines(crate::types::SectionName::LongDescription));
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }
}
