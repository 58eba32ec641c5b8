use super::normalize::normalize_cell;
use super::schema::ParameterIndex;
use crate::domain::{Catalogue, CellValue, DisplayNameMap, TableKind};
use tracing::{debug, warn};

/// One of the four parallel output matrices: rows are parameters, columns
/// are materials.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub kind: TableKind,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<CellValue>>,
}

impl ResultTable {
    fn empty(kind: TableKind, row_labels: &[String]) -> Self {
        Self {
            kind,
            row_labels: row_labels.to_vec(),
            column_labels: Vec::new(),
            cells: vec![Vec::new(); row_labels.len()],
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[CellValue])> {
        self.row_labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultTables {
    pub values: ResultTable,
    pub units: ResultTable,
    pub references: ResultTable,
    pub notes: ResultTable,
}

impl ResultTables {
    pub fn build(catalogue: &Catalogue, display_names: &DisplayNameMap) -> Self {
        let index = ParameterIndex::collect(catalogue, display_names);
        debug!(parameters = index.len(), "collected parameter index");
        Self::from_index(catalogue, &index)
    }

    pub fn from_index(catalogue: &Catalogue, index: &ParameterIndex) -> Self {
        let labels = index.labels();
        let mut tables = Self {
            values: ResultTable::empty(TableKind::Values, labels),
            units: ResultTable::empty(TableKind::Units, labels),
            references: ResultTable::empty(TableKind::References, labels),
            notes: ResultTable::empty(TableKind::Notes, labels),
        };

        for material in &catalogue.materials {
            let name = material.display_name();
            let existing = tables
                .values
                .column_labels
                .iter()
                .position(|label| *label == name);
            let column = match existing {
                Some(existing) => {
                    warn!(
                        material = %material.id,
                        column = %name,
                        "duplicate material display name; later record replaces earlier column"
                    );
                    existing
                }
                None => {
                    for table in tables.tables_mut() {
                        table.column_labels.push(name.clone());
                        for row in &mut table.cells {
                            row.push(CellValue::not_available());
                        }
                    }
                    tables.values.column_labels.len() - 1
                }
            };

            for (row, key) in index.keys().iter().enumerate() {
                let normalized = normalize_cell(material.entry(key));
                tables.values.cells[row][column] = normalized.value;
                tables.units.cells[row][column] = normalized.units;
                tables.references.cells[row][column] = normalized.citekey;
                tables.notes.cells[row][column] = normalized.notes;
            }
        }

        tables
    }

    pub fn get(&self, kind: TableKind) -> &ResultTable {
        match kind {
            TableKind::Values => &self.values,
            TableKind::Units => &self.units,
            TableKind::References => &self.references,
            TableKind::Notes => &self.notes,
        }
    }

    /// Tables in output order: values, units, references, notes.
    pub fn iter(&self) -> impl Iterator<Item = &ResultTable> {
        TableKind::ALL.into_iter().map(|kind| self.get(kind))
    }

    fn tables_mut(&mut self) -> [&mut ResultTable; 4] {
        [
            &mut self.values,
            &mut self.units,
            &mut self.references,
            &mut self.notes,
        ]
    }

    pub fn material_count(&self) -> usize {
        self.values.column_count()
    }

    pub fn parameter_count(&self) -> usize {
        self.values.row_count()
    }
}
