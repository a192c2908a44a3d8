//! Wing type records.
//!
//! ```text
//! Type 9: Peacemaker Wing (The Self-Effacing One): blends with calm
//! Personality: A grounded and easygoing presence.
//! Strengths:
//! • Patient
//! Challenges:
//! • Passive
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{append_continuation, WingType, WingTypes};

use super::rules::{dispatch, DroppedLine, Lenient, Rule};

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Type \d+: .+?) Wing (\([^)]*\)):\s*(.*)$").expect("wing header pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Personality,
    Strengths,
    Challenges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// Just after a header; free text extends the description.
    InRecord,
    InField(Field),
}

struct WingMachine {
    state: State,
    current: Option<(String, WingType)>,
    records: WingTypes,
    dropped: Vec<DroppedLine>,
}

impl WingMachine {
    fn flush(&mut self) {
        if let Some((key, record)) = self.current.take() {
            if self.records.insert(key.clone(), record).is_some() {
                self.dropped
                    .push(DroppedLine::new(&key, "repeated wing record replaced an earlier one"));
            }
        }
    }

    fn record(&mut self) -> Option<&mut WingType> {
        self.current.as_mut().map(|(_, record)| record)
    }
}

const RULES: &[Rule<WingMachine>] = &[
    Rule {
        name: "header",
        applies: is_header,
        apply: open_record,
    },
    Rule {
        name: "personality",
        applies: |m, line| m.state != State::Idle && line.starts_with("Personality:"),
        apply: start_personality,
    },
    Rule {
        name: "strengths",
        applies: |m, line| m.state != State::Idle && line.starts_with("Strengths:"),
        apply: |m, line| start_list(m, line, Field::Strengths),
    },
    Rule {
        name: "challenges",
        applies: |m, line| m.state != State::Idle && line.starts_with("Challenges:"),
        apply: |m, line| start_list(m, line, Field::Challenges),
    },
    Rule {
        name: "list-item",
        applies: is_list_item,
        apply: push_list_item,
    },
    Rule {
        name: "personality-continuation",
        applies: |m, line| {
            m.state == State::InField(Field::Personality) && !line.starts_with("• ")
        },
        apply: |m, line| {
            if let Some(record) = m.record() {
                append_continuation(&mut record.combination.personality, line);
            }
        },
    },
    Rule {
        name: "description-continuation",
        applies: |m, line| m.state == State::InRecord && !line.starts_with("• "),
        apply: |m, line| {
            if let Some(record) = m.record() {
                append_continuation(&mut record.description, line);
            }
        },
    },
];

fn is_header(_: &WingMachine, line: &str) -> bool {
    HEADER.is_match(line)
}

fn open_record(m: &mut WingMachine, line: &str) {
    let Some(caps) = HEADER.captures(line) else {
        return;
    };
    m.flush();
    let record = WingType {
        description: caps[3].trim().to_string(),
        alias: caps[2].to_string(),
        ..WingType::default()
    };
    m.current = Some((caps[1].to_string(), record));
    m.state = State::InRecord;
}

fn start_personality(m: &mut WingMachine, line: &str) {
    let text = line.trim_start_matches("Personality:").trim().to_string();
    if let Some(record) = m.record() {
        record.combination.personality = text;
    }
    m.state = State::InField(Field::Personality);
}

fn start_list(m: &mut WingMachine, line: &str, field: Field) {
    m.state = State::InField(field);
    // Text after the colon counts as the first item.
    if let Some((_, rest)) = line.split_once(':') {
        if !rest.trim().is_empty() {
            push_item(m, rest.trim(), field);
        }
    }
}

fn is_list_item(m: &WingMachine, line: &str) -> bool {
    matches!(
        m.state,
        State::InField(Field::Strengths) | State::InField(Field::Challenges)
    ) && line.starts_with("• ")
}

fn push_list_item(m: &mut WingMachine, line: &str) {
    if let State::InField(field) = m.state {
        let item = line.trim_start_matches("• ").trim();
        push_item(m, item, field);
    }
}

fn push_item(m: &mut WingMachine, item: &str, field: Field) {
    let Some(record) = m.record() else {
        return;
    };
    let target = match field {
        Field::Strengths => &mut record.combination.strengths,
        Field::Challenges => &mut record.combination.challenges,
        Field::Personality => return,
    };
    target.push(item.to_string());
}

/// Parse wing records keyed by `"Type N: Name"`.
///
/// Makes no assumption about how many records there are. Lines that fit
/// no rule in the current state are dropped.
pub fn parse_wing_types(lines: &[String]) -> Lenient<WingTypes> {
    let mut machine = WingMachine {
        state: State::Idle,
        current: None,
        records: WingTypes::new(),
        dropped: Vec::new(),
    };

    for line in lines {
        if dispatch(&mut machine, RULES, line).is_none() {
            let reason = match machine.state {
                State::Idle => "text before the first wing header",
                _ => "line does not fit the current wing field",
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
