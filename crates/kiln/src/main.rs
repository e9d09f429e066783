//! Kiln CLI - Scaffold frontend projects from framework templates
//!
//! This is the main entry point for the kiln command-line interface.

mod cli;
mod commands;
mod output;
mod prompter;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let globals = cli.globals();
    match cli.command {
        Commands::Create(args) => commands::create::run(args, &globals),
        Commands::Templates(args) => commands::templates::run(args, &globals),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Keep the default quiet so log lines never interleave with prompts
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
