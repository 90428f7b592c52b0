//! Validate command implementation

use anyhow::{Context, Result};
use bunkei_core::{EnglishLexicon, LexiconConfig};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon configuration...");
        println!("  File: {}", self.lexicon_config.display());

        let raw = fs::read_to_string(&self.lexicon_config)
            .with_context(|| format!("Failed to read {}", self.lexicon_config.display()))?;
        let config = LexiconConfig::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.lexicon_config.display()))?;
        EnglishLexicon::from_config(&config)
            .with_context(|| format!("Invalid lexicon in {}", self.lexicon_config.display()))?;

        println!("✓ Lexicon '{}' is valid!", config.metadata.name);
        println!();
        println!("Word lists:");
        println!("  clause connectives:     {}", config.clause.connectives.len());
        println!(
            "  subordinating:          {}",
            config.detection.subordinating.len()
        );
        println!(
            "  coordinating:           {}",
            config.detection.coordinating.len()
        );
        println!("  contrast markers:       {}", config.compound.contrast.len());
        println!("  negation words:         {}", config.compound.negation.len());
        println!(
            "  complex subordinators:  {}",
            config.complex.connectives.len()
        );
        Ok(())
    }
}
