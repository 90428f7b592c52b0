//! bunkei command-line entry point

use bunkei_cli::commands::Commands;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "bunkei",
    version,
    about = "Sentence-structure classification and rewriting",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
