use clap::Parser;
use ennea::cli::{Cli, Commands};
use ennea::output::Printer;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Show(args) => ennea::cli::show::run(args, &printer)?,
        Commands::Validate(args) => {
            if !ennea::cli::validate::run(args, &printer)? {
                std::process::exit(1);
            }
        }
        Commands::List(args) => ennea::cli::list::run(args, &printer)?,
        Commands::Sections(args) => ennea::cli::sections::run(args)?,
        Commands::Watch(args) => ennea::cli::watch::run(args, &printer)?,
        Commands::Init(args) => ennea::cli::init::run(args, &printer)?,
        Commands::Completions(args) => ennea::cli::completions::run(args)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "ennea=warn",
        1 => "ennea=info",
        _ => "ennea=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
