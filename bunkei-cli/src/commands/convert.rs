//! Convert command implementation

use super::common::{self, OutputArgs, PipelineArgs, StrategyArg, TargetArg};
use crate::input;
use anyhow::Result;
use clap::Args;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Target structural form
    #[arg(long = "to", value_enum, value_name = "TYPE")]
    pub target: TargetArg,

    /// Connector strategy for Compound conversion
    #[arg(long, value_enum, default_value = "contrast-aware")]
    pub strategy: StrategyArg,

    /// Seed for the Complex subordinator choice, for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        common::init_logging(self.output.quiet, self.output.verbose);
        log::info!(
            "converting toward {:?} ({})",
            self.target,
            self.pipeline.language_name()
        );

        let items = input::collect(&self.pipeline.input, self.pipeline.text.as_deref())?;
        let processor =
            common::build_processor(&self.pipeline, &items, self.strategy.into(), self.seed)?;
        let records =
            common::process_items(&items, &processor, Some(self.target.into()), self.output.quiet);
        common::write_records(&records, &self.output)
    }
}
