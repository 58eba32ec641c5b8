use crate::domain::{CellValue, EntryValue, ParameterEntry, Polynomial};

/// Coefficient token used when a polynomial term is absent.
pub const ZERO_COEFFICIENT: &str = "0.0";

/// The four cells one entry contributes to the parallel tables.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    pub value: CellValue,
    pub units: CellValue,
    pub citekey: CellValue,
    pub notes: CellValue,
}

impl NormalizedEntry {
    pub fn not_available() -> Self {
        Self {
            value: CellValue::not_available(),
            units: CellValue::not_available(),
            citekey: CellValue::not_available(),
            notes: CellValue::not_available(),
        }
    }
}

/// Normalizes a material's entry for one parameter row. A material with no
/// entry for the row gets `N/A` in all four cells.
pub fn normalize_cell(entry: Option<&ParameterEntry>) -> NormalizedEntry {
    entry.map_or_else(NormalizedEntry::not_available, normalize)
}

pub fn normalize(entry: &ParameterEntry) -> NormalizedEntry {
    let value = match &entry.value {
        EntryValue::Quaternary(polynomial) | EntryValue::Ternary(polynomial) => {
            CellValue::text(render_polynomial(polynomial))
        }
        EntryValue::Direct(value) => value.clone(),
        EntryValue::Missing => CellValue::not_available(),
    };

    NormalizedEntry {
        value,
        units: entry.units.clone().unwrap_or_else(CellValue::not_available),
        citekey: entry
            .sources
            .as_ref()
            .map_or_else(CellValue::not_available, |sources| sources.citekey()),
        notes: entry.notes.clone().unwrap_or_else(CellValue::not_available),
    }
}

/// Renders `{a0} + {ax}x + ...`, one `{coefficient}{monomial}` term per key.
pub fn render_polynomial(polynomial: &Polynomial) -> String {
    polynomial
        .form
        .terms()
        .iter()
        .zip(&polynomial.coefficients)
        .map(|((_, monomial), coefficient)| {
            let token = coefficient
                .as_ref()
                .map_or_else(|| ZERO_COEFFICIENT.to_string(), ToString::to_string);
            format!("{token}{monomial}")
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
