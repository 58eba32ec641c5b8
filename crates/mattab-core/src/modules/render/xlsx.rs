use super::{ArtifactWriter, RenderError};
use crate::domain::OutputTarget;
use crate::modules::serialization::ensure_parent_dir;
use crate::modules::table::{ResultTable, ResultTables};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use std::path::Path;

/// One workbook with a sheet per table, in values/units/references/notes
/// order, each autofitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbookWriter;

impl ArtifactWriter for XlsxWorkbookWriter {
    fn target(&self) -> OutputTarget {
        OutputTarget::Excel
    }

    fn write(&self, tables: &ResultTables, path: &Path) -> Result<(), RenderError> {
        let mut workbook = build_workbook(tables)?;
        ensure_parent_dir(path)?;
        workbook.save(path)?;
        Ok(())
    }
}

pub fn build_workbook(tables: &ResultTables) -> Result<Workbook, RenderError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for table in tables.iter() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.kind.sheet_name())?;
        write_sheet(worksheet, table, &header)?;
        worksheet.autofit();
    }
    Ok(workbook)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    table: &ResultTable,
    header: &Format,
) -> Result<(), RenderError> {
    for (column, label) in table.column_labels.iter().enumerate() {
        let (row, column) = position(0, column + 1)?;
        worksheet.write_string_with_format(row, column, label, header)?;
    }

    for (row, (label, cells)) in table.rows().enumerate() {
        let (sheet_row, label_column) = position(row + 1, 0)?;
        worksheet.write_string_with_format(sheet_row, label_column, label, header)?;

        for (column, cell) in cells.iter().enumerate() {
            let (sheet_row, sheet_column) = position(row + 1, column + 1)?;
            match cell.as_f64() {
                Some(number) => worksheet.write_number(sheet_row, sheet_column, number)?,
                None => worksheet.write_string(sheet_row, sheet_column, &cell.to_string())?,
            };
        }
    }
    Ok(())
}

fn position(row: usize, column: usize) -> Result<(RowNum, ColNum), RenderError> {
    let sheet_row = RowNum::try_from(row).map_err(|_| RenderError::SheetBounds { row, column })?;
    let sheet_column =
        ColNum::try_from(column).map_err(|_| RenderError::SheetBounds { row, column })?;
    Ok((sheet_row, sheet_column))
}
