//! Level-of-development sections.
//!
//! ```text
//! - Perfectionism: Holding yourself
//! to impossible standards
//! - Resentment: Anger held in check
//! ```

use crate::types::{append_continuation, LevelTrait};

use super::rules::{dispatch, DroppedLine, Lenient, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InTrait,
}

struct TraitMachine {
    state: State,
    traits: Vec<LevelTrait>,
    dropped: Vec<DroppedLine>,
}

const RULES: &[Rule<TraitMachine>] = &[
    Rule {
        name: "trait",
        applies: is_trait_line,
        apply: open_trait,
    },
    Rule {
        name: "bullet-without-trait",
        applies: is_bullet,
        apply: drop_bullet,
    },
    Rule {
        name: "continuation",
        applies: in_trait,
        apply: continue_trait,
    },
];

fn split_trait(line: &str) -> Option<(&str, &str)> {
    let (name, explanation) = line.strip_prefix("- ")?.split_once(':')?;
    let name = name.trim();
    (!name.is_empty()).then(|| (name, explanation.trim()))
}

fn is_trait_line(_: &TraitMachine, line: &str) -> bool {
    split_trait(line).is_some()
}

fn open_trait(m: &mut TraitMachine, line: &str) {
    if let Some((name, explanation)) = split_trait(line) {
        m.traits.push(LevelTrait::new(name, explanation));
        m.state = State::InTrait;
    }
}

fn is_bullet(_: &TraitMachine, line: &str) -> bool {
    line.starts_with("- ")
}

fn drop_bullet(m: &mut TraitMachine, line: &str) {
    m.dropped
        .push(DroppedLine::new(line, "bullet has no `Trait:` prefix"));
    m.state = State::Idle;
}

fn in_trait(m: &TraitMachine, _: &str) -> bool {
    m.state == State::InTrait
}

fn continue_trait(m: &mut TraitMachine, line: &str) {
    if let Some(current) = m.traits.last_mut() {
        append_continuation(&mut current.explanation, line);
    }
}

/// Parse `- Trait: explanation` bullets, joining continuation lines.
///
/// Order is preserved. Text before the first trait and bullets without a
/// colon are dropped.
pub fn parse_level_traits(lines: &[String]) -> Lenient<Vec<LevelTrait>> {
    let mut machine = TraitMachine {
        state: State::Idle,
        traits: Vec::new(),
        dropped: Vec::new(),
    };

    for line in lines {
        if dispatch(&mut machine, RULES, line).is_none() {
            machine
                .dropped
                .push(DroppedLine::new(line, "text outside of a trait"));
        }
    }

    Lenient {
        value: machine.traits,
        dropped: machine.dropped,
    }
}
