//! Flat list sections.
//!
//! Items are written either as `- item` bullets or `1. item` numbered
//! lines. Ordinary lists are strict: any other line means the list is
//! broken. The misconceptions list is more forgiving, letting a bold
//! numbered headline run on over the following lines.

use thiserror::Error;

use crate::types::append_continuation;

/// A line in a list section that carries no list marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line \"{line}\" is not a list item")]
pub struct UnmarkedLine {
    pub line: String,
}

/// Parse a strict list: every line must be a bullet or numbered item.
///
/// A marker with no text after it is accepted and contributes no entry.
pub fn parse_list(lines: &[String]) -> Result<Vec<String>, UnmarkedLine> {
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = strip_marker(line).ok_or_else(|| UnmarkedLine { line: line.clone() })?;
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    Ok(items)
}

/// Parse the misconceptions list.
///
/// A numbered item whose text opens with `**` starts an entry that absorbs
/// the unmarked lines after it. Unmarked lines anywhere else are errors,
/// as in [`parse_list`].
pub fn parse_misconceptions(lines: &[String]) -> Result<Vec<String>, UnmarkedLine> {
    let mut entries: Vec<String> = Vec::new();
    let mut accepts_continuation = false;

    for line in lines {
        if let Some(item) = strip_marker(line) {
            accepts_continuation = is_numbered(line) && item.starts_with("**");
            if !item.is_empty() {
                entries.push(item.to_string());
            }
            continue;
        }

        match entries.last_mut() {
            Some(entry) if accepts_continuation => append_continuation(entry, line),
            _ => return Err(UnmarkedLine { line: line.clone() }),
        }
    }

    Ok(entries)
}

/// Item text with its `- ` or `<n>. ` marker removed.
///
/// Segmented lines arrive trimmed, so an item written as `- ` shows up
/// as a bare `-` and yields empty text.
pub(crate) fn strip_marker(line: &str) -> Option<&str> {
    if line == "-" {
        return Some("");
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Some(rest.trim());
    }
    let digits = numbered_prefix_len(line)?;
    numbered_text(&line[digits..])
}

fn is_numbered(line: &str) -> bool {
    numbered_prefix_len(line).is_some_and(|digits| numbered_text(&line[digits..]).is_some())
}

fn numbered_text(after_digits: &str) -> Option<&str> {
    match after_digits {
        "." => Some(""),
        _ => after_digits.strip_prefix(". ").map(str::trim),
    }
}

fn numbered_prefix_len(line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then_some(digits)
}
