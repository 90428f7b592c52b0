//! Analyze command implementation

use super::common::{self, OutputArgs, PipelineArgs};
use crate::input;
use anyhow::Result;
use bunkei_core::CompoundStrategy;
use clap::Args;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        common::init_logging(self.output.quiet, self.output.verbose);
        log::info!("analyzing sentence structure ({})", self.pipeline.language_name());

        let items = input::collect(&self.pipeline.input, self.pipeline.text.as_deref())?;
        let processor =
            common::build_processor(&self.pipeline, &items, CompoundStrategy::default(), None)?;
        let records = common::process_items(&items, &processor, None, self.output.quiet);
        common::write_records(&records, &self.output)
    }
}
