//! Watch command implementation.
//!
//! Validates every type once, then re-validates a type whenever its
//! document changes on disk.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::mpsc;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::discovery::{digit_for, Manifest};
use crate::error::{ContentError, Result};
use crate::output::{display_path, Printer};
use crate::registry::TypeRegistry;
use crate::types::TypeDigit;
use crate::validation::{check_record, print_diagnostics};

use super::ProjectArgs;

/// Re-validate type documents as they change
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let discovery = args.project.discover()?;
    let content_dir = discovery.content_dir();
    let manifest = discovery.manifest.clone();
    let registry = discovery.into_registry()?;

    for digit in TypeDigit::all() {
        revalidate(&registry, digit, printer);
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| watch_error(&content_dir, e))?;
    watcher
        .watch(&content_dir, RecursiveMode::NonRecursive)
        .map_err(|e| watch_error(&content_dir, e))?;
    printer.info("Watching", &display_path(&content_dir));

    for event in rx {
        match event {
            Ok(event) => {
                for digit in changed_digits(&event, &manifest) {
                    registry.invalidate(digit);
                    revalidate(&registry, digit, printer);
                }
            }
            Err(e) => printer.warning("Watch", &e.to_string()),
        }
    }

    Ok(())
}

/// Digits whose documents an event touched.
pub fn changed_digits(event: &Event, manifest: &Manifest) -> BTreeSet<TypeDigit> {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return BTreeSet::new();
    }

    event
        .paths
        .iter()
        .filter(|path| !manifest.is_excluded(path))
        .filter_map(|path| path.file_name()?.to_str())
        .filter_map(|name| digit_for(name, manifest))
        .collect()
}

fn revalidate(registry: &TypeRegistry, digit: TypeDigit, printer: &Printer) {
    match registry.load(digit) {
        Ok(loaded) => {
            let mut diagnostics = loaded.warnings;
            diagnostics.merge(check_record(&loaded.record));
            printer.status("Checked", &format!("type {} ({})", digit, loaded.record.name));
            if !diagnostics.is_empty() {
                print_diagnostics(&diagnostics, printer);
            }
        }
        Err(e) => printer.error("Failed", &format!("type {}: {}", digit, e)),
    }
}

fn watch_error(dir: &Path, error: notify::Error) -> ContentError {
    ContentError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to watch content directory: {}", error),
    }
}
