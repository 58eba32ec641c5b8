use super::CliError;
use mattab_core::modules::{render_human_summary, run_pipeline};
use mattab_core::PipelineConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(clap::Args)]
pub(super) struct TabulateArgs {
    /// Directory holding material_data.json, field_names.json and filenames.json
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory the output base names are resolved against
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl TabulateArgs {
    pub(super) fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.input_dir, &self.output_dir)
    }
}

pub(super) fn run_tabulate_command(args: TabulateArgs) -> Result<i32, CliError> {
    let config = args.pipeline_config();
    debug!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting tabulation"
    );

    let report = run_pipeline(&config)?;
    println!("{}", render_human_summary(&report));
    Ok(0)
}
