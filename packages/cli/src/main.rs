mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, info, new, CheckArgs, InfoArgs, NewArgs};

/// Blueprint CLI - Inspect and scaffold node-graph documents
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new blueprint document with the starter graph
    New(NewArgs),

    /// Validate a document's links
    Check(CheckArgs),

    /// Print a document summary
    Info(InfoArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::New(args) => new(args),
        Command::Check(args) => check(args),
        Command::Info(args) => info(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
