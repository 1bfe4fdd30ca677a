//! Rhetor CLI entry point.

use clap::Parser;
use rhetor::cli::commands;
use rhetor::cli::{Cli, Commands};
use rhetor::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let data_dir = rhetor::config::resolve_data_dir(cli.data_dir.as_deref())?;
    let json = cli.json;

    match &cli.command {
        Commands::Init { force } => commands::init::execute(&data_dir, *force, json),

        Commands::Ingest { text, sequences } => {
            commands::ingest::execute(text, sequences.as_deref(), &data_dir, json)
        }

        Commands::Predictions { file } => {
            commands::ingest::execute_predictions(file, &data_dir, json)
        }

        Commands::Clause { command } => commands::clause::execute(command, &data_dir, json),

        Commands::Sequence { command } => commands::sequence::execute(command, &data_dir, json),

        Commands::Text { start, end } => commands::text::execute(*start, *end, &data_dir, json),

        Commands::Export { out } => commands::export::execute(out, &data_dir, json),

        Commands::Clear { force } => commands::clear::execute(*force, &data_dir, json),
    }
}
