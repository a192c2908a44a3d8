//! List command implementation.
//!
//! Discovers type documents and prints an inventory.

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

/// List discovered type documents
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = args.project.discover()?;
    let scan = &discovery.scan;

    if !discovery.has_manifest {
        printer.info("Manifest", &printer.dim("none (using defaults)"));
    }

    for (digit, path) in &scan.types {
        printer.info(&format!("Type {}", digit), &display_path(path));
    }

    let missing = scan.missing();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|d| d.to_string()).collect();
        printer.warning("Missing", &format!("types {}", names.join(", ")));
    }

    for stray in &scan.strays {
        printer.warning("Unmatched", &display_path(stray));
    }

    printer.success(
        "Found",
        &format!(
            "{} in {}",
            plural(scan.types.len(), "type document", "type documents"),
            display_path(&discovery.content_dir())
        ),
    );

    Ok(())
}
