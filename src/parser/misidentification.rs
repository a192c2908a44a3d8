//! Misidentification records.
//!
//! ```text
//! • Type 2: The Helper
//! - Shared Traits
//! • Accommodating
//! - Key Differences
//! • Core Motivation: Nines seek peace, Twos seek love
//! • Behavioral Differences: Twos reach out, Nines settle in
//! • Stress Behavior: Twos become demanding
//! ```

use crate::types::{append_continuation, Misidentification};

use super::rules::{dispatch, DroppedLine, Lenient, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Difference {
    CoreMotivation,
    Behavioral,
    Stress,
}

const DIFFERENCE_FIELDS: &[(&str, Difference)] = &[
    ("Core Motivation:", Difference::CoreMotivation),
    ("Behavioral Differences:", Difference::Behavioral),
    ("Stress Behavior:", Difference::Stress),
];

impl Difference {
    fn slot(self, record: &mut Misidentification) -> &mut String {
        match self {
            Difference::CoreMotivation => &mut record.differences.core_motivation,
            Difference::Behavioral => &mut record.differences.behavioral,
            Difference::Stress => &mut record.differences.stress,
        }
    }
}

/// Known difference field and its text, for a `• Field: text` bullet.
fn split_difference(line: &str) -> Option<(Difference, &str)> {
    let item = line.strip_prefix("• ")?.trim_start();
    DIFFERENCE_FIELDS.iter().find_map(|(label, field)| {
        item.strip_prefix(*label).map(|rest| (*field, rest.trim()))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InRecord,
    SharedTraits,
    /// Collecting differences; holds the field last assigned.
    Differences(Option<Difference>),
}

struct MisidentificationMachine {
    state: State,
    current: Option<Misidentification>,
    records: Vec<Misidentification>,
    dropped: Vec<DroppedLine>,
}

impl MisidentificationMachine {
    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }
}

const RULES: &[Rule<MisidentificationMachine>] = &[
    Rule {
        name: "record",
        applies: |_, line| line.starts_with("• Type"),
        apply: open_record,
    },
    Rule {
        name: "shared-traits",
        applies: |m, line| m.state != State::Idle && line.starts_with("- Shared Traits"),
        apply: |m, _| m.state = State::SharedTraits,
    },
    Rule {
        name: "key-differences",
        applies: |m, line| m.state != State::Idle && line.starts_with("- Key Differences"),
        apply: |m, _| m.state = State::Differences(None),
    },
    Rule {
        name: "shared-trait",
        applies: |m, line| m.state == State::SharedTraits && line.starts_with("• "),
        apply: push_shared_trait,
    },
    Rule {
        name: "difference",
        applies: |m, line| {
            matches!(m.state, State::Differences(_)) && split_difference(line).is_some()
        },
        apply: set_difference,
    },
    Rule {
        name: "difference-continuation",
        applies: |m, line| {
            matches!(m.state, State::Differences(Some(_)))
                && !line.starts_with("• ")
                && !line.starts_with("- ")
        },
        apply: continue_difference,
    },
];

fn open_record(m: &mut MisidentificationMachine, line: &str) {
    m.flush();
    m.current = Some(Misidentification {
        type_label: line.trim_start_matches("• ").trim().to_string(),
        ..Misidentification::default()
    });
    m.state = State::InRecord;
}

fn push_shared_trait(m: &mut MisidentificationMachine, line: &str) {
    if let Some(record) = m.current.as_mut() {
        let item = line.trim_start_matches("• ").trim();
        record.shared_traits.push(item.to_string());
    }
}

fn set_difference(m: &mut MisidentificationMachine, line: &str) {
    let Some((field, text)) = split_difference(line) else {
        return;
    };
    if let Some(record) = m.current.as_mut() {
        *field.slot(record) = text.to_string();
    }
    m.state = State::Differences(Some(field));
}

fn continue_difference(m: &mut MisidentificationMachine, line: &str) {
    if let (State::Differences(Some(field)), Some(record)) = (m.state, m.current.as_mut()) {
        append_continuation(field.slot(record), line);
    }
}

/// Parse a misidentification section into records, in source order.
///
/// Bullets under `- Key Differences` that name none of the known fields
/// are left out of the record and reported as dropped lines.
pub fn parse_misidentifications(lines: &[String]) -> Lenient<Vec<Misidentification>> {
    let mut machine = MisidentificationMachine {
        state: State::Idle,
        current: None,
        records: Vec::new(),
        dropped: Vec::new(),
    };

    for line in lines {
        if dispatch(&mut machine, RULES, line).is_none() {
            let reason = match machine.state {
                State::Idle => "text before the first `• Type` record",
                State::Differences(_) if line.starts_with("• ") => "unknown difference field",
                _ => "line does not fit the current record",
            };
            machine.dropped.push(DroppedLine::new(line, reason));
        }
    }
    machine.flush();

    Lenient {
        value: machine.records,
        dropped: machine.dropped,
    }
}
