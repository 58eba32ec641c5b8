use super::{ArtifactWriter, RenderError};
use crate::domain::{CellValue, OutputTarget, TableKind};
use crate::modules::serialization::write_text_artifact;
use crate::modules::table::{ResultTable, ResultTables};
use std::path::Path;

pub const COLUMN_SPEC: &str = "p{1.5cm}";

/// A single `.tex` file holding one `longtable` per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexTablesWriter;

impl ArtifactWriter for LatexTablesWriter {
    fn target(&self) -> OutputTarget {
        OutputTarget::LatexTables
    }

    fn write(&self, tables: &ResultTables, path: &Path) -> Result<(), RenderError> {
        write_text_artifact(path, &render_document(tables))?;
        Ok(())
    }
}

/// Blocks in values, units, references, notes order, separated by a blank
/// line.
pub fn render_document(tables: &ResultTables) -> String {
    tables
        .iter()
        .map(render_longtable)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header and row labels are written verbatim so display names may carry
/// LaTeX markup; only data cells are escaped.
pub fn render_longtable(table: &ResultTable) -> String {
    let column_spec = COLUMN_SPEC.repeat(table.column_count() + 1);
    let header = table_row("", table.column_labels.iter().cloned());

    let mut out = String::new();
    out.push_str(&format!("\\begin{{longtable}}{{{column_spec}}}\n"));
    out.push_str(&header);
    out.push_str("\\endfirsthead\n");
    out.push_str(&header);
    out.push_str("\\endhead\n");
    for (label, cells) in table.rows() {
        let cells = cells.iter().map(|cell| format_cell(table.kind, cell));
        out.push_str(&table_row(label, cells));
    }
    out.push_str("\\end{longtable}\n");
    out
}

fn table_row(label: &str, cells: impl Iterator<Item = String>) -> String {
    let mut fields = vec![label.to_string()];
    fields.extend(cells);
    format!("{} \\\\\n", fields.join(" & "))
}

/// Values and notes are escaped text, units go into math mode and
/// references into a `\cite`.
pub fn format_cell(kind: TableKind, cell: &CellValue) -> String {
    let text = cell.to_string();
    match kind {
        TableKind::Values | TableKind::Notes => escape_latex(&text),
        TableKind::Units => format!("${text}$"),
        TableKind::References => format!("\\cite{{{}}}", escape_latex(&text)),
    }
}

pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\textbackslash "),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '~' => escaped.push_str("\\textasciitilde "),
            '^' => escaped.push_str("\\textasciicircum "),
            other => escaped.push(other),
        }
    }
    escaped
}
