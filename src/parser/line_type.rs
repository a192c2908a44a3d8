//! Line type records: the types reached in growth and stress.
//!
//! ```text
//! Type 3: Achiever: Under growth, Nines become energized
//! Healthy: Self-directed and
//! productive.
//! Average: Busy but scattered.
//! Unhealthy: Numb activity.
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{append_continuation, LineType, LineTypes};

use super::rules::{dispatch, DroppedLine, Lenient, Rule};

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Type \d+: [^:]+):\s*(.*)$").expect("line header pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dynamic {
    Healthy,
    Average,
    Unhealthy,
}

impl Dynamic {
    fn label(self) -> &'static str {
        match self {
            Dynamic::Healthy => "Healthy:",
            Dynamic::Average => "Average:",
            Dynamic::Unhealthy => "Unhealthy:",
        }
    }

    fn slot(self, record: &mut LineType) -> &mut String {
        match self {
            Dynamic::Healthy => &mut record.dynamics.healthy,
            Dynamic::Average => &mut record.dynamics.average,
            Dynamic::Unhealthy => &mut record.dynamics.unhealthy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InRecord,
    InField(Dynamic),
}

struct LineMachine {
    state: State,
    current: Option<(String, LineType)>,
    records: LineTypes,
    dropped: Vec<DroppedLine>,
}

impl LineMachine {
    fn flush(&mut self) {
        if let Some((key, record)) = self.current.take() {
            if self.records.insert(key.clone(), record).is_some() {
                self.dropped
                    .push(DroppedLine::new(&key, "repeated line record replaced an earlier one"));
            }
        }
    }

    fn set_field(&mut self, line: &str, dynamic: Dynamic) {
        let text = line.trim_start_matches(dynamic.label()).trim();
        if let Some((_, record)) = self.current.as_mut() {
            *dynamic.slot(record) = text.to_string();
        }
        self.state = State::InField(dynamic);
    }
}

fn in_record(m: &LineMachine) -> bool {
    m.state != State::Idle
}

// Field headers come before the type header so `Healthy: Type 9: ...`
// prose is never mistaken for a new record.
const RULES: &[Rule<LineMachine>] = &[
    Rule {
        name: "healthy",
        applies: |m, line| in_record(m) && line.starts_with("Healthy:"),
        apply: |m, line| m.set_field(line, Dynamic::Healthy),
    },
    Rule {
        name: "average",
        applies: |m, line| in_record(m) && line.starts_with("Average:"),
        apply: |m, line| m.set_field(line, Dynamic::Average),
    },
    Rule {
        name: "unhealthy",
        applies: |m, line| in_record(m) && line.starts_with("Unhealthy:"),
        apply: |m, line| m.set_field(line, Dynamic::Unhealthy),
    },
    Rule {
        name: "header",
        applies: |_, line| HEADER.is_match(line),
        apply: open_record,
    },
    Rule {
        name: "continuation",
        applies: |m, _| in_record(m),
        apply: continue_field,
    },
];

fn open_record(m: &mut LineMachine, line: &str) {
    let Some(caps) = HEADER.captures(line) else {
        return;
    };
    m.flush();
    let record = LineType {
        description: caps[2].trim().to_string(),
        ..LineType::default()
    };
    m.current = Some((caps[1].to_string(), record));
    m.state = State::InRecord;
}

fn continue_field(m: &mut LineMachine, line: &str) {
    let state = m.state;
    let Some((_, record)) = m.current.as_mut() else {
        return;
    };
    match state {
        State::InField(dynamic) => append_continuation(dynamic.slot(record), line),
        State::InRecord => append_continuation(&mut record.description, line),
        State::Idle => {}
    }
}

/// Parse line records keyed by `"Type N: Name"`.
///
/// Text before the first header is dropped.
pub fn parse_line_types(lines: &[String]) -> Lenient<LineTypes> {
    let mut machine = LineMachine {
        state: State::Idle,
        current: None,
        records: LineTypes::new(),
        dropped: Vec::new(),
    };

    for line in lines {
        if dispatch(&mut machine, RULES, line).is_none() {
            machine
                .dropped
                .push(DroppedLine::new(line, "text before the first line header"));
        }
    }
    machine.flush();

    Lenient {
        value: machine.records,
        dropped: machine.dropped,
    }
}
