//! Generate-lexicon command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Name for the new lexicon
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateLexiconArgs {
    /// Execute the generate-lexicon command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon configuration template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists to match your conventions");
        println!("2. Validate the lexicon:");
        println!(
            "   bunkei validate --lexicon-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   bunkei analyze -i input.txt --lexicon-config {}",
            self.output.display()
        );
        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# bunkei lexicon configuration "{}"

[metadata]
name = "{}"

# Whole-word connectives that open a new clause during segmentation.
[clause]
connectives = [
    "and", "but", "or", "nor", "so", "for", "yet",
    "because", "although", "while", "when", "since", "though", "unless",
]

# Word lists consulted by the sentence-type detector.
[detection]
subordinating = [
    "because", "although", "since", "when", "while",
    "if", "after", "before", "though", "unless",
]
coordinating = ["and", "but", "or", "nor", "so", "for", "yet"]

# Compound conversion: a contrast marker in either adjacent clause, or a
# negation flip between the two, forces a but-join. Optional; the built-in
# lists apply when this section is omitted.
[compound]
contrast = [
    "but", "however", "although", "though", "yet",
    "whereas", "conversely", "on the other hand",
]
negation = [
    "not", "never", "none", "neither", "nor",
    "without", "hardly", "barely", "scarcely",
]

# Complex conversion picks one of these subordinators per rewrite. Optional.
[complex]
connectives = ["because", "although", "while", "since", "when"]
"#,
            self.name, self.name
        )
    }
}
