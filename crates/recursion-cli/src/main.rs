//! `recurse`: word search and square merging from the command line.
//!
//! - `recurse find NOON NOPE --board "N C A N E ..."` checks words on a board
//! - `recurse add 0 "[1, 0, 1, 0]"` adds two split squares

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::{AddArgs, FindArgs};

#[derive(Parser, Debug)]
#[command(name = "recurse")]
#[command(version)]
#[command(about = "Boggle word search and split-square addition")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look for words on a 5x5 board
    Find(FindArgs),
    /// Add two split squares
    Add(AddArgs),
}

fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn main() {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Find(args) => commands::run_find(args),
        Commands::Add(args) => commands::run_add(args),
    };

    if let Err(e) = result {
        let message = error_chain(&e);
        tracing::error!(error = %message, "command failed");
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

/// Error with every cause, outermost first
fn error_chain(e: &anyhow::Error) -> String {
    format!("{:#}", e)
}
