use super::loader::{LoadedInputs, load_inputs};
use super::render::{OutputArtifact, render_all};
use super::table::ResultTables;
use crate::common::config::PipelineConfig;
use crate::domain::MattabResult;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub material_count: usize,
    pub parameter_count: usize,
    pub artifacts: Vec<OutputArtifact>,
}

/// Load, tabulate, render. Input errors abort before any output is
/// written; output errors are collected across all targets.
pub fn run_pipeline(config: &PipelineConfig) -> MattabResult<RunReport> {
    let inputs = load_inputs(config)?;
    run_with_inputs(&inputs, config)
}

pub fn run_with_inputs(inputs: &LoadedInputs, config: &PipelineConfig) -> MattabResult<RunReport> {
    let tables = ResultTables::build(&inputs.catalogue, &inputs.display_names);
    info!(
        materials = tables.material_count(),
        parameters = tables.parameter_count(),
        "built result tables"
    );

    let artifacts = render_all(&tables, &inputs.output_names, config).into_result()?;
    Ok(RunReport {
        material_count: tables.material_count(),
        parameter_count: tables.parameter_count(),
        artifacts,
    })
}

pub fn render_human_summary(report: &RunReport) -> String {
    let mut lines = vec![format!(
        "Tabulated {} materials x {} parameters",
        report.material_count, report.parameter_count
    )];
    lines.extend(
        report
            .artifacts
            .iter()
            .map(|artifact| format!("wrote {}", artifact.path.display())),
    );
    lines.join("\n")
}
