pub mod completions;
pub mod init;
pub mod list;
pub mod sections;
pub mod show;
pub mod validate;
pub mod watch;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::discovery::{discover_with, DiscoveryResult, Overrides};
use crate::error::Result;

/// ennea - Enneagram type content parser and validator
#[derive(Parser, Debug)]
#[command(name = "ennea")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one validated type record
    Show(show::ShowArgs),

    /// Load type documents and report errors and warnings
    Validate(validate::ValidateArgs),

    /// List discovered type documents
    List(list::ListArgs),

    /// Print the section map of a markdown file
    Sections(sections::SectionsArgs),

    /// Re-validate type documents as they change
    Watch(watch::WatchArgs),

    /// Initialize a project (generates ennea.yaml and an example type)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Project location flags shared by commands that read content.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root holding ennea.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Content directory (overrides ennea.yaml)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// File name pattern containing {digit} (overrides ennea.yaml)
    #[arg(long)]
    pub pattern: Option<String>,
}

impl ProjectArgs {
    pub fn discover(&self) -> Result<DiscoveryResult> {
        let overrides = Overrides {
            content: self.content.clone(),
            pattern: self.pattern.clone(),
        };
        discover_with(&self.root, &overrides)
    }
}
