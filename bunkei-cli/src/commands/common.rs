//! Argument groups and plumbing shared by the analyze and convert commands

use crate::error::CliError;
use crate::input::InputItem;
use crate::output::{make_formatter, OutputFormat, Record};
use crate::progress::ProgressReporter;
use crate::tokens;
use anyhow::{Context, Result};
use bunkei_core::{
    CompoundStrategy, Config, Language, LexiconConfig, LexiconProfile, SeededChooser,
    SentenceType, StaticTokenProvider, StructureProcessor,
};
use clap::Args;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::{fs, io};

/// Input and pipeline selection shared by analyze/convert
#[derive(Debug, Args)]
pub struct PipelineArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Inline text to process (stdin is read when neither this nor --input is given)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Language for segmentation and detection rules
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: LanguageArg,

    /// Built-in lexicon profile (English mode)
    #[arg(long, value_enum, default_value = "full")]
    pub lexicon: ProfileArg,

    /// Custom lexicon configuration file (English mode)
    #[arg(long, value_name = "FILE", conflicts_with = "lexicon")]
    pub lexicon_config: Option<PathBuf>,

    /// Pre-tokenized input as a JSON token array (Japanese mode, single input)
    #[arg(long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,
}

/// Output selection shared by analyze/convert
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PipelineArgs {
    /// Language name for log lines
    pub fn language_name(&self) -> &'static str {
        Language::from(self.language).name()
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LanguageArg {
    /// English language rules
    English,
    /// Japanese language rules
    Japanese,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Japanese => Language::Japanese,
        }
    }
}

/// Built-in lexicon profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProfileArg {
    /// Full connective set
    Full,
    /// Variant without nor/for/yet
    Reduced,
}

impl From<ProfileArg> for LexiconProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Full => LexiconProfile::Full,
            ProfileArg::Reduced => LexiconProfile::Reduced,
        }
    }
}

/// Target structural forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetArg {
    /// Every clause as its own sentence
    Simple,
    /// Clauses joined by coordinating connectives
    Compound,
    /// Clauses folded under a subordinator
    Complex,
    /// Detection-only label; conversion toward it is a no-op
    CompoundComplex,
}

impl From<TargetArg> for SentenceType {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Simple => SentenceType::Simple,
            TargetArg::Compound => SentenceType::Compound,
            TargetArg::Complex => SentenceType::Complex,
            TargetArg::CompoundComplex => SentenceType::CompoundComplex,
        }
    }
}

/// Compound connector strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Contrast markers and negation flips force a but-join
    ContrastAware,
    /// Always join with and
    Naive,
}

impl From<StrategyArg> for CompoundStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ContrastAware => CompoundStrategy::ContrastAware,
            StrategyArg::Naive => CompoundStrategy::Naive,
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Build a processor from pipeline arguments
///
/// `items` is needed up front because the pre-tokenized input path binds a
/// token stream to the exact text being processed.
pub fn build_processor(
    pipeline: &PipelineArgs,
    items: &[InputItem],
    strategy: CompoundStrategy,
    seed: Option<u64>,
) -> Result<StructureProcessor> {
    let mut builder = Config::builder()
        .language_mode(pipeline.language.into())
        .lexicon_profile(pipeline.lexicon.into())
        .compound_strategy(strategy);

    if let Some(path) = &pipeline.lexicon_config {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon config: {}", path.display()))?;
        let config = LexiconConfig::from_toml_str(&raw)
            .with_context(|| format!("Invalid lexicon config: {}", path.display()))?;
        log::info!("using custom lexicon '{}'", config.metadata.name);
        builder = builder.lexicon_config(config);
    }

    if let Some(path) = &pipeline.tokens {
        if pipeline.language != LanguageArg::Japanese {
            return Err(CliError::TokensRequireJapanese.into());
        }
        if items.len() != 1 {
            return Err(CliError::TokensRequireSingleInput(items.len()).into());
        }
        let token_stream = tokens::load_tokens(path)?;
        log::debug!("loaded {} tokens from {}", token_stream.len(), path.display());
        builder = builder.token_provider(Arc::new(StaticTokenProvider::for_text(
            items[0].text.clone(),
            token_stream,
        )));
    }

    if let Some(seed) = seed {
        builder = builder.connector_chooser(Arc::new(SeededChooser::new(seed)));
    }

    Ok(builder.build_processor()?)
}

/// Run the processor over every input, preserving input order
pub fn process_items(
    items: &[InputItem],
    processor: &StructureProcessor,
    target: Option<SentenceType>,
    quiet: bool,
) -> Vec<Record> {
    let progress = ProgressReporter::start(items.len(), quiet);
    let records = items
        .par_iter()
        .map(|item| {
            let detected = processor.detect(&item.text);
            let converted = target.map(|target| processor.convert(&item.text, target));
            progress.item_done(&item.source);
            Record {
                source: item.source.clone(),
                original: item.text.clone(),
                detected: detected.label().to_string(),
                converted,
            }
        })
        .collect();
    progress.finish();
    records
}

/// Render records with the selected formatter, to stdout or a file
pub fn write_records(records: &[Record], output: &OutputArgs) -> Result<()> {
    let writer: Box<dyn Write> = match &output.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    let mut formatter = make_formatter(output.format, writer);
    for record in records {
        formatter.format_record(record)?;
    }
    formatter.finish()
}
