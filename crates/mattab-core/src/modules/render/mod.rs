mod delimited;
mod latex;
mod xlsx;

pub use delimited::{CsvTableWriter, render_csv};
pub use latex::{LatexTablesWriter, escape_latex, format_cell, render_document, render_longtable};
pub use xlsx::{XlsxWorkbookWriter, build_workbook};

use super::table::ResultTables;
use crate::common::config::PipelineConfig;
use crate::domain::{MattabError, MattabResult, OutputFileNames, OutputTarget, TableKind};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("cell at row {row}, column {column} is outside spreadsheet limits")]
    SheetBounds { row: usize, column: usize },
}

pub trait ArtifactWriter {
    fn target(&self) -> OutputTarget;

    fn write(&self, tables: &ResultTables, path: &Path) -> Result<(), RenderError>;
}

/// Writers for every output target, in `OutputTarget::ALL` order.
pub fn artifact_writers() -> Vec<Box<dyn ArtifactWriter>> {
    let mut writers: Vec<Box<dyn ArtifactWriter>> = TableKind::ALL
        .into_iter()
        .map(|kind| Box::new(CsvTableWriter::new(kind)) as Box<dyn ArtifactWriter>)
        .collect();
    writers.push(Box::new(XlsxWorkbookWriter));
    writers.push(Box::new(LatexTablesWriter));
    writers
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub target: OutputTarget,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFailure {
    pub target: OutputTarget,
    pub path: PathBuf,
    pub error: MattabError,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOutcome {
    pub written: Vec<OutputArtifact>,
    pub failures: Vec<OutputFailure>,
}

impl RenderOutcome {
    /// Folds collected failures into one error naming every failed target.
    pub fn into_result(self) -> MattabResult<Vec<OutputArtifact>> {
        if self.failures.is_empty() {
            return Ok(self.written);
        }

        let details = self
            .failures
            .iter()
            .map(|failure| format!("{} ({})", failure.target, failure.error.message()))
            .collect::<Vec<_>>()
            .join("; ");
        Err(MattabError::io(
            "IO.OUTPUT_WRITE",
            format!(
                "{} of {} output targets failed: {}",
                self.failures.len(),
                self.failures.len() + self.written.len(),
                details
            ),
        ))
    }
}

/// Attempts every output target; a failing target is logged and recorded
/// without stopping the others.
pub fn render_all(
    tables: &ResultTables,
    names: &OutputFileNames,
    config: &PipelineConfig,
) -> RenderOutcome {
    render_with(&artifact_writers(), tables, names, config)
}

pub fn render_with(
    writers: &[Box<dyn ArtifactWriter>],
    tables: &ResultTables,
    names: &OutputFileNames,
    config: &PipelineConfig,
) -> RenderOutcome {
    let mut outcome = RenderOutcome::default();

    for writer in writers {
        let target = writer.target();
        let path = config.output_path(&names.file_name(target));
        match writer.write(tables, &path) {
            Ok(()) => {
                info!(target_name = %target, path = %path.display(), "wrote output");
                outcome.written.push(OutputArtifact { target, path });
            }
            Err(source) => {
                let error = MattabError::io(
                    "IO.OUTPUT_WRITE",
                    format!("failed to write {} '{}': {}", target, path.display(), source),
                );
                error!(target_name = %target, path = %path.display(), %source, "output failed");
                outcome.failures.push(OutputFailure {
                    target,
                    path,
                    error,
                });
            }
        }
    }
    outcome
}
