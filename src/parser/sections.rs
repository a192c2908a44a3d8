//! Splitting a markdown body into bracket-delimited sections.

use crate::types::SectionName;

/// One `[Header]` block and the non-blank lines beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text exactly as written between the brackets.
    pub title: String,
    /// 1-indexed body line of the header (first occurrence).
    pub line: usize,
    /// Trimmed, non-blank lines in source order.
    pub lines: Vec<String>,
}

impl Section {
    /// The canonical name, or `None` for headers outside the known set.
    pub fn name(&self) -> Option<SectionName> {
        SectionName::from_title(&self.title)
    }
}

/// Sections of one document body, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Lines of a canonical section; empty when the section is absent.
    pub fn lines(&self, name: SectionName) -> &[String] {
        self.get(name.title())
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Sections whose header is not one of the canonical names.
    pub fn unknown(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.name().is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn open(&mut self, title: &str, line: usize) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.title == title) {
            return index;
        }
        self.sections.push(Section {
            title: title.to_string(),
            line,
            lines: Vec::new(),
        });
        self.sections.len() - 1
    }
}

/// Split a document body into named sections.
///
/// A line consisting of `[name]` opens a block that runs until the next
/// header. Blank lines are dropped, lines before the first header are
/// discarded, and a repeated header continues its earlier block.
pub fn segment_sections(body: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current: Option<usize> = None;

    for (index, raw) in body.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = header_title(line) {
            current = Some(map.open(title, index + 1));
            continue;
        }

        if let Some(section) = current {
            map.sections[section].lines.push(line.to_string());
        }
    }

    map
}

/// Header text if `line` is exactly `[name]`.
fn header_title(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment_two_sections() {
        let body = "[Type Summary]\nCalm and steady.\n\n[Growth Practices]\n- Meditate daily\n- Journal weekly\n";

        let map = segment_sections(body);

        assert_eq!(map.len(), 2);
        assert_eq!(map.lines(SectionName::TypeSummary), ["Calm and steady."]);
        assert_eq!(
            map.lines(SectionName::GrowthPractices),
            ["- Meditate daily", "- Journal weekly"]
        );
    }

    #[test]
    fn test_preamble_is_discarded() {
        let body = "# Type Nine\nIntro text\n[Type Summary]\nSummary";

        let map = segment_sections(body);

        assert_eq!(map.len(), 1);
        assert_eq!(map.lines(SectionName::TypeSummary), ["Summary"]);
    }

    #[test]
    fn test_no_headers_yields_empty_map() {
        let map = segment_sections("Just some prose.\n- and a bullet");

        assert!(map.is_empty());
        assert!(map.lines(SectionName::FamousExamples).is_empty());
    }

    #[test]
    fn test_unknown_headers_are_kept() {
        let body = "[Career Paths]\n- Mediator\n[Famous Examples]\n- Fred Rogers";

        let map = segment_sections(body);
        let unknown: Vec<&str> = map.unknown().map(|s| s.title.as_str()).collect();

        assert_eq!(unknown, vec!["Career Paths"]);
        assert_eq!(map.get("Career Paths").unwrap().lines, vec!["- Mediator"]);
    }

    #[test]
    fn test_repeated_header_appends() {
        let body = "[Famous Examples]\n- A\n[Type Summary]\nx\n[Famous Examples]\n- B";

        let map = segment_sections(body);

        assert_eq!(map.len(), 2);
        assert_eq!(map.lines(SectionName::FamousExamples), ["- A", "- B"]);
        assert_eq!(map.get("Famous Examples").unwrap().line, 1);
    }

    #[test]
    fn test_bracketed_text_inside_line_is_not_a_header() {
        let body = "[Long Description]\n[Note] see below\n[[Nested]]\n[]";

        let map = segment_sections(body);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.lines(SectionName::LongDescription),
            ["[Note] see below", "[[Nested]]", "[]"]
        );
    }

    #[test]
    fn test_indented_header_and_lines_are_trimmed() {
        let map = segment_sections("  [Wing Types]  \n   Type 8: Challenger Wing (x): y  ");

        assert_eq!(
            map.lines(SectionName::WingTypes),
            ["Type 8: Challenger Wing (x): y"]
        );
    }
}
