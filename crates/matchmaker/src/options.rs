use std::collections::BTreeSet;

use crate::dataset::{Dataset, Field};

/// Distinct trimmed comma-separated tokens found in `field` across the dataset, sorted.
///
/// Empty tokens (from doubled or trailing commas) are skipped.
pub fn unique_options(dataset: &Dataset, field: Field) -> Vec<String> {
  let mut options = BTreeSet::new();
  for record in dataset.records() {
    for item in record.field(field).split(',') {
      let item = item.trim();
      if !item.is_empty() {
        options.insert(item.to_string());
      }
    }
  }
  options.into_iter().collect()
}

/// Selectable values for every filterable field, computed once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
  pub stages: Vec<String>,
  pub markets: Vec<String>,
  pub geographies: Vec<String>,
}

impl FieldOptions {
  pub fn from_dataset(dataset: &Dataset) -> Self {
    Self {
      stages: unique_options(dataset, Field::Stage),
      markets: unique_options(dataset, Field::Market),
      geographies: unique_options(dataset, Field::Geography),
    }
  }

  pub fn for_field(&self, field: Field) -> &[String] {
    match field {
      Field::Stage => &self.stages,
      Field::Market => &self.markets,
      Field::Geography => &self.geographies,
    }
  }
}
