//! Init command implementation.
//!
//! Writes a default `ennea.yaml` and an example type document so a new
//! project validates out of the box.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{ContentError, Result};
use crate::output::{display_path, Printer};
use crate::types::TypeDigit;

const EXAMPLE_DOCUMENT: &str = include_str!("example-type.md");

/// Initialize a project (generates ennea.yaml and an example type)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::default();
    let manifest_path = args.path.join(MANIFEST_FILENAME);
    let content_dir = args.path.join(&manifest.content);
    let example_path = content_dir.join(manifest.file_name(TypeDigit::MIN));

    for path in [&manifest_path, &example_path] {
        if path.exists() && !args.force {
            return Err(ContentError::Io {
                path: path.clone(),
                message: "file already exists (use --force to overwrite)".to_string(),
            });
        }
    }

    fs::create_dir_all(&content_dir).map_err(|e| io_error(&content_dir, e))?;
    write(&manifest_path, &manifest.to_yaml()?)?;
    printer.success("Created", &display_path(&manifest_path));

    write(&example_path, EXAMPLE_DOCUMENT)?;
    printer.success("Created", &display_path(&example_path));

    Ok(())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, error: std::io::Error) -> ContentError {
    ContentError::Io {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use tempfile::tempdir;

    fn args(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_init_creates_a_valid_project() {
        let dir = tempdir().unwrap();

        run(args(dir.path(), false), &Printer::with_color(false)).unwrap();

        let discovery = discover(dir.path()).unwrap();
        assert!(discovery.has_manifest);
        assert_eq!(discovery.scan.types.len(), 1);

        let registry = discovery.into_registry().unwrap();
        let loaded = registry.load(TypeDigit::MIN).unwrap();
        assert_eq!(loaded.record.name, "The Reformer");
        assert!(loaded.warnings.is_empty());
        assert!(crate::validation::check_record(&loaded.record).is_empty());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ennea.yaml"), "content: docs").unwrap();

        let result = run(args(dir.path(), false), &Printer::with_color(false));
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ennea.yaml"), "content: docs").unwrap();

        run(args(dir.path(), true), &Printer::with_color(false)).unwrap();

        let content = fs::read_to_string(dir.path().join("ennea.yaml")).unwrap();
        assert!(content.contains("content: content/types"));
    }
}
