use crate::domain::{Catalogue, DisplayNameMap};
use std::collections::HashSet;

/// Row order shared by every output table.
///
/// `keys` drive lookups into material records; `labels` is the parallel
/// sequence of display labels used only when rendering row headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterIndex {
    keys: Vec<String>,
    labels: Vec<String>,
}

impl ParameterIndex {
    /// Collects parameter keys in first-seen order: materials in catalogue
    /// order, then each material's own key order.
    pub fn collect(catalogue: &Catalogue, display_names: &DisplayNameMap) -> Self {
        let mut seen = HashSet::new();
        let mut index = Self::default();

        for material in &catalogue.materials {
            for (key, _) in &material.parameters {
                if seen.insert(key.as_str()) {
                    index.keys.push(key.clone());
                    index.labels.push(display_names.label_for(key).to_string());
                }
            }
        }
        index
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().map(String::as_str))
    }
}
