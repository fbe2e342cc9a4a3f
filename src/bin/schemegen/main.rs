//! schemegen CLI - helper generation from annotated header schemes

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use schemegen::ops::FatalSchemeError;
use schemegen::util::diagnostic;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        match e.downcast_ref::<FatalSchemeError>() {
            Some(fatal) => {
                for rejection in &fatal.rejections {
                    diagnostic::emit(&rejection.to_diagnostic(), color);
                }
                diagnostic::emit(&fatal.to_diagnostic(), color);
            }
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("schemegen=debug")
    } else {
        EnvFilter::new("schemegen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, color),
        Commands::List(args) => commands::list::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
