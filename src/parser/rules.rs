//! Ordered line rules driving the record parsers' state machines.
//!
//! Each record parser keeps its accumulator and current state in a small
//! machine struct and declares a table of rules. For every line the first
//! rule whose predicate accepts it runs; a line no rule accepts is handed
//! back to the parser, which records it as dropped.

/// One line-classification rule for machine `M`.
pub(crate) struct Rule<M> {
    /// Short label used in trace output.
    pub name: &'static str,
    /// Whether this rule handles `line` in the machine's current state.
    pub applies: fn(&M, &str) -> bool,
    /// Apply the line to the machine, possibly changing its state.
    pub apply: fn(&mut M, &str),
}

/// Run the first matching rule; returns its name, or `None` if no rule matched.
pub(crate) fn dispatch<M>(machine: &mut M, rules: &[Rule<M>], line: &str) -> Option<&'static str> {
    let rule = rules.iter().find(|rule| (rule.applies)(machine, line))?;
    (rule.apply)(machine, line);
    Some(rule.name)
}

/// A parse result that may have skipped some lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenient<T> {
    pub value: T,
    pub dropped: Vec<DroppedLine>,
}

impl<T> Lenient<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lenient<U> {
        Lenient {
            value: f(self.value),
            dropped: self.dropped,
        }
    }
}

/// A line a lenient parser could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    pub line: String,
    pub reason: &'static str,
}

impl DroppedLine {
    pub(crate) fn new(line: &str, reason: &'static str) -> Self {
        tracing::debug!(line, reason, "dropping unrecognized line");
        Self {
            line: line.to_string(),
            reason,
        }
    }
}
