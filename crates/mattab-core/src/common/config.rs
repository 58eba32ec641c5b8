//! Input file names and directory layout for a pipeline run.

use std::path::{Path, PathBuf};

pub const CATALOGUE_FILE: &str = "material_data.json";
pub const DISPLAY_NAMES_FILE: &str = "field_names.json";
pub const OUTPUT_NAMES_FILE: &str = "filenames.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Reads and writes everything inside one directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref(), dir.as_ref())
    }

    pub fn catalogue_path(&self) -> PathBuf {
        self.input_dir.join(CATALOGUE_FILE)
    }

    pub fn display_names_path(&self) -> PathBuf {
        self.input_dir.join(DISPLAY_NAMES_FILE)
    }

    pub fn output_names_path(&self) -> PathBuf {
        self.input_dir.join(OUTPUT_NAMES_FILE)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
