use crate::dataset::{Dataset, Field, InvestorRecord};

/// Keywords picked for each field in one search.
///
/// An empty list places no constraint on its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
  pub stages: Vec<String>,
  pub markets: Vec<String>,
  pub geographies: Vec<String>,
}

impl FilterSelection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn keywords(&self, field: Field) -> &[String] {
    match field {
      Field::Stage => &self.stages,
      Field::Market => &self.markets,
      Field::Geography => &self.geographies,
    }
  }

  pub fn set_keywords(&mut self, field: Field, keywords: Vec<String>) {
    match field {
      Field::Stage => self.stages = keywords,
      Field::Market => self.markets = keywords,
      Field::Geography => self.geographies = keywords,
    }
  }

  pub fn is_empty(&self) -> bool {
    Field::ALL.iter().all(|field| self.keywords(*field).is_empty())
  }
}

/// True when `keywords` is empty or any keyword occurs in `cell`, ignoring case
pub fn matches_any(cell: &str, keywords: &[String]) -> bool {
  if keywords.is_empty() {
    return true;
  }
  let cell = cell.to_lowercase();
  keywords.iter().any(|kw| cell.contains(&kw.to_lowercase()))
}

pub fn matches(record: &InvestorRecord, selection: &FilterSelection) -> bool {
  Field::ALL.iter().all(|field| matches_any(record.field(*field), selection.keywords(*field)))
}

/// Records satisfying every field of `selection`, in dataset order
pub fn filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a InvestorRecord> {
  dataset.records().iter().filter(|record| matches(record, selection)).collect()
}
