use crate::common::config::PipelineConfig;
use crate::domain::{
    Catalogue, CellValue, DisplayNameMap, FULL_NAME_KEY, MaterialRecord, MattabError, MattabResult,
    OutputFileNames, ParameterEntry,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The three decoded input mappings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedInputs {
    pub catalogue: Catalogue,
    pub display_names: DisplayNameMap,
    pub output_names: OutputFileNames,
}

pub fn load_inputs(config: &PipelineConfig) -> MattabResult<LoadedInputs> {
    let catalogue = load_catalogue(&config.catalogue_path())?;
    let display_names = load_display_names(&config.display_names_path())?;
    let output_names = load_output_names(&config.output_names_path())?;

    info!(
        materials = catalogue.materials.len(),
        "loaded material catalogue"
    );
    Ok(LoadedInputs {
        catalogue,
        display_names,
        output_names,
    })
}

pub fn load_catalogue(path: &Path) -> MattabResult<Catalogue> {
    let source = read_input_source(path)?;
    parse_catalogue(&source).map_err(|error| {
        MattabError::input(
            error.code(),
            format!("{} in '{}'", error.message(), path.display()),
        )
    })
}

pub fn load_display_names(path: &Path) -> MattabResult<DisplayNameMap> {
    let source = read_input_source(path)?;
    parse_mapping(&source, path, "INPUT.DISPLAY_NAMES_PARSE")
}

pub fn load_output_names(path: &Path) -> MattabResult<OutputFileNames> {
    let source = read_input_source(path)?;
    parse_mapping(&source, path, "INPUT.FILENAMES_PARSE")
}

fn read_input_source(path: &Path) -> MattabResult<String> {
    debug!(path = %path.display(), "reading input");
    fs::read_to_string(path).map_err(|source| {
        MattabError::io(
            "IO.INPUT_READ",
            format!("failed to read input '{}': {}", path.display(), source),
        )
    })
}

/// Decodes a JSON object into `T`. Any other top-level value is rejected
/// before `serde` sees it, since derived struct impls also accept arrays.
fn parse_mapping<T: DeserializeOwned>(
    source: &str,
    path: &Path,
    code: &'static str,
) -> MattabResult<T> {
    let parse_error = |error: serde_json::Error| {
        MattabError::input(
            code,
            format!("failed to parse '{}': {}", path.display(), error),
        )
    };

    let root: Value = serde_json::from_str(source).map_err(parse_error)?;
    if !root.is_object() {
        return Err(MattabError::input(
            code,
            format!("'{}' must contain a JSON object", path.display()),
        ));
    }
    serde_json::from_value(root).map_err(parse_error)
}

/// Decodes the material catalogue, keeping file order for materials and
/// for each material's parameters.
pub fn parse_catalogue(source: &str) -> MattabResult<Catalogue> {
    let root: Value = serde_json::from_str(source).map_err(|error| {
        MattabError::input(
            "INPUT.CATALOGUE_PARSE",
            format!("failed to parse material catalogue: {}", error),
        )
    })?;
    let Value::Object(materials) = root else {
        return Err(MattabError::input(
            "INPUT.CATALOGUE_SHAPE",
            "material catalogue must be a mapping of material id to record",
        ));
    };

    let materials = materials
        .iter()
        .map(|(id, record)| parse_material(id, record))
        .collect::<MattabResult<Vec<_>>>()?;
    Ok(Catalogue { materials })
}

fn parse_material(id: &str, record: &Value) -> MattabResult<MaterialRecord> {
    let Value::Object(fields) = record else {
        return Err(MattabError::input(
            "INPUT.CATALOGUE_SHAPE",
            format!("material '{}' must be a mapping of parameter entries", id),
        ));
    };

    let mut full_name = None;
    let mut parameters = Vec::with_capacity(fields.len());
    for (key, entry) in fields {
        if key == FULL_NAME_KEY {
            full_name = Some(CellValue::new(entry.clone()));
            continue;
        }

        let Value::Object(entry) = entry else {
            return Err(MattabError::input(
                "INPUT.CATALOGUE_SHAPE",
                format!("parameter '{}' of material '{}' must be a mapping", key, id),
            ));
        };
        parameters.push((key.clone(), ParameterEntry::from_json(entry)));
    }

    Ok(MaterialRecord {
        id: id.to_string(),
        full_name,
        parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::{load_inputs, parse_catalogue};
    use crate::common::config::PipelineConfig;
    use crate::domain::{CellValue, EntryValue, MattabErrorCategory};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    const FILENAMES: &str = r#"{
        "values_csv": "values", "units_csv": "units", "citekey_csv": "citekeys",
        "notes_csv": "notes", "excel": "tables", "latex_tables": "tables"
    }"#;

    #[test]
    fn catalogue_preserves_material_and_parameter_order() {
        let catalogue = parse_catalogue(
            r#"{
                "Si": {"zeta": {"value": 1}, "full_name": "Silicon", "alpha": {"value": 2}},
                "Ge": {"beta": {"value": 3}}
            }"#,
        )
        .expect("catalogue should parse");

        let ids: Vec<_> = catalogue.materials.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["Si", "Ge"]);

        let silicon = &catalogue.materials[0];
        assert_eq!(silicon.display_name(), "Silicon");
        let keys: Vec<_> = silicon.parameters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(catalogue.materials[1].display_name(), "Ge");
    }

    #[test]
    fn non_mapping_records_are_rejected() {
        let error = parse_catalogue(r#"{"Si": [1, 2]}"#).expect_err("record should be rejected");
        assert_eq!(error.code(), "INPUT.CATALOGUE_SHAPE");
        assert!(error.message().contains("'Si'"));

        let error = parse_catalogue(r#"{"Si": {"bandgap": 1.12}}"#)
            .expect_err("entry should be rejected");
        assert_eq!(error.code(), "INPUT.CATALOGUE_SHAPE");
        assert!(error.message().contains("'bandgap'"));

        let error = parse_catalogue("[]").expect_err("root should be rejected");
        assert_eq!(error.code(), "INPUT.CATALOGUE_SHAPE");
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let error = parse_catalogue("{not json").expect_err("parse should fail");
        assert_eq!(error.code(), "INPUT.CATALOGUE_PARSE");
        assert_eq!(error.category(), MattabErrorCategory::Input);
    }

    #[test]
    fn load_inputs_reads_all_three_mappings() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(
            temp.path().join("material_data.json"),
            r#"{"Si": {"full_name": "Silicon", "bandgap": {"value": 1.12, "units": "eV"}}}"#,
        )
        .expect("catalogue should be written");
        fs::write(temp.path().join("field_names.json"), r#"{"bandgap": "Band gap"}"#)
            .expect("names should be written");
        fs::write(temp.path().join("filenames.json"), FILENAMES)
            .expect("filenames should be written");

        let inputs = load_inputs(&PipelineConfig::in_dir(temp.path())).expect("inputs should load");
        assert_eq!(inputs.display_names.label_for("bandgap"), "Band gap");
        assert_eq!(inputs.display_names.label_for("mass"), "mass");
        assert_eq!(inputs.output_names.citekey_csv, "citekeys");

        let entry = inputs.catalogue.materials[0]
            .entry("bandgap")
            .expect("bandgap entry should exist");
        assert_eq!(entry.value, EntryValue::Direct(CellValue::new(json!(1.12))));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = load_inputs(&PipelineConfig::in_dir(temp.path()))
            .expect_err("missing catalogue should fail");
        assert_eq!(error.code(), "IO.INPUT_READ");
        assert_eq!(error.exit_code(), 3);
        assert!(error.message().contains("material_data.json"));
    }

    #[test]
    fn incomplete_filenames_mapping_is_rejected() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("material_data.json"), "{}").expect("write catalogue");
        fs::write(temp.path().join("field_names.json"), "{}").expect("write names");
        fs::write(temp.path().join("filenames.json"), r#"{"values_csv": "v"}"#)
            .expect("write filenames");

        let error = load_inputs(&PipelineConfig::in_dir(temp.path()))
            .expect_err("incomplete filenames should fail");
        assert_eq!(error.code(), "INPUT.FILENAMES_PARSE");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn filenames_given_as_a_list_are_rejected() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("material_data.json"), "{}").expect("write catalogue");
        fs::write(temp.path().join("field_names.json"), "{}").expect("write names");
        fs::write(
            temp.path().join("filenames.json"),
            r#"["v", "u", "c", "n", "x", "t"]"#,
        )
        .expect("write filenames");

        let error = load_inputs(&PipelineConfig::in_dir(temp.path()))
            .expect_err("list of filenames should fail");
        assert_eq!(error.code(), "INPUT.FILENAMES_PARSE");
        assert_eq!(error.exit_code(), 2);
        assert!(error.message().contains("must contain a JSON object"));
    }

    #[test]
    fn display_names_must_be_an_object() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("material_data.json"), "{}").expect("write catalogue");
        fs::write(temp.path().join("filenames.json"), FILENAMES).expect("write filenames");

        for source in [r#"[["bandgap", "Band gap"]]"#, r#""bandgap""#, "null"] {
            fs::write(temp.path().join("field_names.json"), source).expect("write names");
            let error = load_inputs(&PipelineConfig::in_dir(temp.path()))
                .expect_err("non-object display names should fail");
            assert_eq!(error.code(), "INPUT.DISPLAY_NAMES_PARSE", "input {source}");
        }
    }

    #[test]
    fn display_names_must_be_strings() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("material_data.json"), "{}").expect("write catalogue");
        fs::write(temp.path().join("field_names.json"), r#"{"bandgap": 3}"#)
            .expect("write names");
        fs::write(temp.path().join("filenames.json"), FILENAMES).expect("write filenames");

        let error = load_inputs(&PipelineConfig::in_dir(temp.path()))
            .expect_err("non-string label should fail");
        assert_eq!(error.code(), "INPUT.DISPLAY_NAMES_PARSE");
    }
}
