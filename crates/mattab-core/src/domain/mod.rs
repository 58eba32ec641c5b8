pub mod errors;

pub use errors::{MattabError, MattabErrorCategory, MattabResult};

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Sentinel written wherever a field or a whole entry is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reserved record key holding a material's display name.
pub const FULL_NAME_KEY: &str = "full_name";

/// A table cell: the JSON value as stored, stringified only when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CellValue(Value);

impl CellValue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }

    pub fn not_available() -> Self {
        Self::text(NOT_AVAILABLE)
    }

    /// Numeric payload, when the stored value was a JSON number.
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            Value::Number(number) => write!(f, "{number}"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Null => Ok(()),
            other => write!(f, "{other}"),
        }
    }
}

/// Citation keys attached to an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Sources {
    Single(CellValue),
    Multiple(Vec<CellValue>),
}

impl Sources {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                Self::Multiple(items.iter().cloned().map(CellValue::new).collect())
            }
            other => Self::Single(CellValue::new(other.clone())),
        }
    }

    pub fn citekey(&self) -> CellValue {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => CellValue::text(
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialForm {
    Ternary,
    Quaternary,
}

impl PolynomialForm {
    /// Coefficient keys paired with the monomial each one multiplies.
    pub const fn terms(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Ternary => &[("a0", ""), ("ax", "x"), ("axx", "x^2")],
            Self::Quaternary => &[
                ("a0", ""),
                ("ax", "x"),
                ("ay", "y"),
                ("axx", "x^2"),
                ("axy", "xy"),
                ("ayy", "yy"),
                ("axxx", "x^3"),
                ("axxy", "x^2y"),
                ("axyy", "xy^2"),
                ("ayyy", "y^3"),
            ],
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Self::Ternary => "ternary",
            Self::Quaternary => "quaternary",
        }
    }
}

/// Coefficients of a polynomial expansion, in `PolynomialForm::terms` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    pub form: PolynomialForm,
    pub coefficients: Vec<Option<CellValue>>,
}

impl Polynomial {
    pub fn from_entry(form: PolynomialForm, entry: &serde_json::Map<String, Value>) -> Self {
        let coefficients = form
            .terms()
            .iter()
            .map(|(key, _)| entry.get(*key).cloned().map(CellValue::new))
            .collect();
        Self { form, coefficients }
    }
}

/// How an entry's value column is produced, resolved in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Quaternary(Polynomial),
    Ternary(Polynomial),
    Direct(CellValue),
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    pub value: EntryValue,
    pub units: Option<CellValue>,
    pub sources: Option<Sources>,
    pub notes: Option<CellValue>,
}

impl ParameterEntry {
    pub fn from_json(entry: &serde_json::Map<String, Value>) -> Self {
        let flag_set =
            |form: PolynomialForm| matches!(entry.get(form.flag()), Some(Value::Bool(true)));

        let value = if flag_set(PolynomialForm::Quaternary) {
            EntryValue::Quaternary(Polynomial::from_entry(PolynomialForm::Quaternary, entry))
        } else if flag_set(PolynomialForm::Ternary) {
            EntryValue::Ternary(Polynomial::from_entry(PolynomialForm::Ternary, entry))
        } else if let Some(direct) = entry.get("value") {
            EntryValue::Direct(CellValue::new(direct.clone()))
        } else {
            EntryValue::Missing
        };

        Self {
            value,
            units: entry.get("units").cloned().map(CellValue::new),
            sources: entry.get("sources").map(Sources::from_json),
            notes: entry.get("notes").cloned().map(CellValue::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub id: String,
    pub full_name: Option<CellValue>,
    /// Parameters in the record's own key order.
    pub parameters: Vec<(String, ParameterEntry)>,
}

impl MaterialRecord {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) => name.to_string(),
            None => self.id.clone(),
        }
    }

    pub fn entry(&self, key: &str) -> Option<&ParameterEntry> {
        self.parameters
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, entry)| entry)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalogue {
    pub materials: Vec<MaterialRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct DisplayNameMap {
    labels: HashMap<String, String>,
}

impl DisplayNameMap {
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl FromIterator<(String, String)> for DisplayNameMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

/// Base names (no extension) for the six output artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputFileNames {
    pub values_csv: String,
    pub units_csv: String,
    pub citekey_csv: String,
    pub notes_csv: String,
    pub excel: String,
    pub latex_tables: String,
}

impl OutputFileNames {
    pub fn base_name(&self, target: OutputTarget) -> &str {
        match target {
            OutputTarget::ValuesCsv => &self.values_csv,
            OutputTarget::UnitsCsv => &self.units_csv,
            OutputTarget::CitekeyCsv => &self.citekey_csv,
            OutputTarget::NotesCsv => &self.notes_csv,
            OutputTarget::Excel => &self.excel,
            OutputTarget::LatexTables => &self.latex_tables,
        }
    }

    pub fn file_name(&self, target: OutputTarget) -> String {
        format!("{}.{}", self.base_name(target), target.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Values,
    Units,
    References,
    Notes,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [Self::Values, Self::Units, Self::References, Self::Notes];

    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::Values => "Values",
            Self::Units => "Units",
            Self::References => "References",
            Self::Notes => "Notes",
        }
    }

    pub const fn csv_target(self) -> OutputTarget {
        match self {
            Self::Values => OutputTarget::ValuesCsv,
            Self::Units => OutputTarget::UnitsCsv,
            Self::References => OutputTarget::CitekeyCsv,
            Self::Notes => OutputTarget::NotesCsv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputTarget {
    ValuesCsv,
    UnitsCsv,
    CitekeyCsv,
    NotesCsv,
    Excel,
    LatexTables,
}

impl OutputTarget {
    pub const ALL: [OutputTarget; 6] = [
        Self::ValuesCsv,
        Self::UnitsCsv,
        Self::CitekeyCsv,
        Self::NotesCsv,
        Self::Excel,
        Self::LatexTables,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValuesCsv => "values_csv",
            Self::UnitsCsv => "units_csv",
            Self::CitekeyCsv => "citekey_csv",
            Self::NotesCsv => "notes_csv",
            Self::Excel => "excel",
            Self::LatexTables => "latex_tables",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::ValuesCsv | Self::UnitsCsv | Self::CitekeyCsv | Self::NotesCsv => "csv",
            Self::Excel => "xlsx",
            Self::LatexTables => "tex",
        }
    }
}

impl Display for OutputTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CellValue, EntryValue, OutputFileNames, OutputTarget, ParameterEntry, PolynomialForm,
        Sources, TableKind,
    };
    use serde_json::json;

    fn entry(value: serde_json::Value) -> ParameterEntry {
        ParameterEntry::from_json(value.as_object().expect("entry should be an object"))
    }

    #[test]
    fn cell_values_render_without_json_quoting() {
        assert_eq!(CellValue::new(json!("eV")).to_string(), "eV");
        assert_eq!(CellValue::new(json!(1.12)).to_string(), "1.12");
        assert_eq!(CellValue::new(json!(2)).to_string(), "2");
        assert_eq!(CellValue::new(json!(true)).to_string(), "true");
        assert_eq!(CellValue::new(json!(null)).to_string(), "");
        assert_eq!(CellValue::new(json!([1, 2])).to_string(), "[1,2]");
        assert_eq!(CellValue::new(json!(1.12)).as_f64(), Some(1.12));
        assert_eq!(CellValue::text("1.12").as_f64(), None);
    }

    #[test]
    fn quaternary_flag_wins_over_ternary_flag() {
        let parsed = entry(json!({"ternary": true, "quaternary": true, "a0": 1}));
        match parsed.value {
            EntryValue::Quaternary(polynomial) => {
                assert_eq!(polynomial.form, PolynomialForm::Quaternary);
                assert_eq!(polynomial.coefficients.len(), 10);
            }
            other => panic!("expected quaternary value, got {other:?}"),
        }
    }

    #[test]
    fn flags_only_count_when_boolean_true() {
        let parsed = entry(json!({"ternary": "true", "quaternary": 1, "value": 3}));
        assert_eq!(parsed.value, EntryValue::Direct(CellValue::new(json!(3))));

        let parsed = entry(json!({"ternary": false}));
        assert_eq!(parsed.value, EntryValue::Missing);
    }

    #[test]
    fn sources_keep_sequence_or_scalar_shape() {
        let many = Sources::from_json(&json!(["A1999", "B2001"]));
        assert_eq!(many.citekey().to_string(), "A1999,B2001");

        let single = Sources::from_json(&json!("A1999"));
        assert_eq!(single, Sources::Single(CellValue::text("A1999")));
        assert_eq!(single.citekey().to_string(), "A1999");

        assert_eq!(Sources::from_json(&json!([])).citekey().to_string(), "");
    }

    #[test]
    fn output_file_names_append_target_extension() {
        let names: OutputFileNames = serde_json::from_value(json!({
            "values_csv": "out", "units_csv": "out", "citekey_csv": "out",
            "notes_csv": "out", "excel": "out", "latex_tables": "out"
        }))
        .expect("filenames should decode");
        assert_eq!(names.file_name(OutputTarget::ValuesCsv), "out.csv");
        assert_eq!(names.file_name(OutputTarget::Excel), "out.xlsx");
        assert_eq!(names.file_name(OutputTarget::LatexTables), "out.tex");
        assert_eq!(TableKind::References.csv_target(), OutputTarget::CitekeyCsv);
        assert_eq!(TableKind::References.sheet_name(), "References");
    }
}
