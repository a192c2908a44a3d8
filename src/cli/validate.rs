//! Validate command implementation.
//!
//! Loads the requested types as one batch, prints every failure and
//! diagnostic, and reports whether the content passed.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::{BatchReport, TypeRegistry};
use crate::types::TypeDigit;
use crate::validation::{check_record, print_diagnostics, ValidationResult};

use super::ProjectArgs;

/// Load type documents and report errors and warnings
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Types to validate (default: all nine)
    pub digits: Vec<TypeDigit>,

    /// Fail on warnings too (also settable in ennea.yaml)
    #[arg(long)]
    pub deny_warnings: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Returns `Ok(false)` when the content did not pass.
pub fn run(args: ValidateArgs, printer: &Printer) -> Result<bool> {
    let discovery = args.project.discover()?;
    let deny_warnings = args.deny_warnings || discovery.manifest.deny_warnings;
    printer.status("Validating", &crate::output::display_path(&discovery.content_dir()));

    let registry = discovery.into_registry()?;
    let digits = if args.digits.is_empty() {
        TypeDigit::all().collect()
    } else {
        args.digits
    };

    let outcome = validate(&registry, digits);
    report(&outcome, printer);
    Ok(outcome.passed(deny_warnings))
}

/// Batch results plus parse and content-check diagnostics for the loaded records.
#[derive(Debug)]
pub struct Outcome {
    pub batch: BatchReport,
    pub diagnostics: ValidationResult,
}

impl Outcome {
    pub fn passed(&self, deny_warnings: bool) -> bool {
        self.batch.is_ok()
            && !self.diagnostics.has_errors()
            && !(deny_warnings && self.diagnostics.has_warnings())
    }
}

pub fn validate(registry: &TypeRegistry, digits: Vec<TypeDigit>) -> Outcome {
    let mut batch = registry.load_many(digits);

    let mut diagnostics = std::mem::take(&mut batch.warnings);
    for record in batch.records.values() {
        diagnostics.merge(check_record(record));
    }

    Outcome { batch, diagnostics }
}

fn report(outcome: &Outcome, printer: &Printer) {
    for record in outcome.batch.records.values() {
        printer.status("Loaded", &format!("type {} ({})", record.digit, record.name));
    }

    for (digit, error) in &outcome.batch.failures {
        printer.error("Failed", &format!("type {}: {}", digit, error));
    }

    if !outcome.diagnostics.is_empty() {
        print_diagnostics(&outcome.diagnostics, printer);
    }

    let summary = format!(
        "{} loaded, {} failed, {}, {}",
        outcome.batch.records.len(),
        outcome.batch.failures.len(),
        plural(outcome.diagnostics.error_count(), "error", "errors"),
        plural(outcome.diagnostics.warning_count(), "warning", "warnings")
    );
    if outcome.batch.is_ok() && !outcome.diagnostics.has_errors() {
        printer.success("Finished", &summary);
    } else {
        printer.error("Finished", &summary);
    }
}
