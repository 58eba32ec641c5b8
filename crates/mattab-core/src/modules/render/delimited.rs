use super::{ArtifactWriter, RenderError};
use crate::domain::{OutputTarget, TableKind};
use crate::modules::serialization::write_binary_artifact;
use crate::modules::table::{ResultTable, ResultTables};
use csv::{Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// One delimited-text file per table: an unlabeled index column of row
/// labels, then one column per material.
#[derive(Debug, Clone, Copy)]
pub struct CsvTableWriter {
    kind: TableKind,
}

impl CsvTableWriter {
    pub fn new(kind: TableKind) -> Self {
        Self { kind }
    }
}

impl ArtifactWriter for CsvTableWriter {
    fn target(&self) -> OutputTarget {
        self.kind.csv_target()
    }

    fn write(&self, tables: &ResultTables, path: &Path) -> Result<(), RenderError> {
        let bytes = render_csv(tables.get(self.kind), Vec::new())?;
        write_binary_artifact(path, &bytes)?;
        Ok(())
    }
}

pub fn render_csv<W: Write>(table: &ResultTable, sink: W) -> Result<W, RenderError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    let header = std::iter::once("").chain(table.column_labels.iter().map(String::as_str));
    writer.write_record(header)?;
    for (label, cells) in table.rows() {
        let mut record = Vec::with_capacity(cells.len() + 1);
        record.push(label.to_string());
        record.extend(cells.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|error| RenderError::Io(error.into_error()))
}
