//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod common;
pub mod convert;
pub mod generate_lexicon;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the structural type of each input
    Analyze(analyze::AnalyzeArgs),

    /// Rewrite each input toward a target structural form
    Convert(convert::ConvertArgs),

    /// Validate a custom lexicon configuration file
    Validate(validate::ValidateArgs),

    /// Write a lexicon configuration template
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available languages
    Languages,
    /// List available output formats
    Formats,
    /// List the sentence-type taxonomy
    Types,
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("english  (en) - regex/heuristic pipeline");
                println!("japanese (ja) - morphological-token pipeline");
            }
            ListCommands::Formats => {
                println!("text     - one result per line");
                println!("json     - array of records");
                println!("markdown - result blocks per input");
            }
            ListCommands::Types => {
                println!("simple           - independent clauses as separate sentences");
                println!("compound         - clauses joined by coordinating connectives");
                println!("complex          - a subordinate clause under a main clause");
                println!("compound-complex - both kinds present (English detection only)");
            }
        }
    }
}
