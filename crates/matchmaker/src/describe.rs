//! Sentences sent to the reranker: one for the startup, one per candidate investor.

use crate::dataset::InvestorRecord;
use crate::filter::FilterSelection;

/// Describe the hypothetical startup from the user's selections
pub fn startup_description(selection: &FilterSelection) -> String {
  let mut description = String::from("A startup");
  if !selection.stages.is_empty() {
    description.push_str(&format!(" at stage(s) {}", selection.stages.join(", ")));
  }
  if !selection.markets.is_empty() {
    description.push_str(&format!(" in the market(s) {}", selection.markets.join(", ")));
  }
  if !selection.geographies.is_empty() {
    description.push_str(&format!(" based in {}", selection.geographies.join(", ")));
  }
  description.push('.');
  description
}

/// Describe an investor's focus from its raw cells
pub fn investor_description(record: &InvestorRecord) -> String {
  format!(
    "Invests in {} stage {} startups in {}.",
    record.stages, record.markets, record.geographies
  )
}

/// The (investor name, description) pairs sent in the most recent search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionCache {
  entries: Vec<(String, String)>,
}

impl DescriptionCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_entries(entries: Vec<(String, String)>) -> Self {
    Self { entries }
  }

  pub fn entries(&self) -> &[(String, String)] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_no_selection_is_bare_startup() {
    assert_eq!(startup_description(&FilterSelection::new()), "A startup.");
  }

  #[test]
  fn test_clauses_appear_in_fixed_order() {
    let selection = FilterSelection {
      stages: vec!["Seed".into(), "Series A".into()],
      markets: vec!["Fintech".into()],
      geographies: vec!["US".into(), "EU".into()],
    };
    assert_eq!(
      startup_description(&selection),
      "A startup at stage(s) Seed, Series A in the market(s) Fintech based in US, EU."
    );
  }

  #[test]
  fn test_empty_clause_is_omitted() {
    let selection = FilterSelection { geographies: vec!["US".into()], ..Default::default() };
    let description = startup_description(&selection);
    assert_eq!(description, "A startup based in US.");
    assert!(!description.contains("stage(s)"));
    assert!(!description.contains("market(s)"));
  }

  #[test]
  fn test_investor_description_uses_raw_cells() {
    let record = InvestorRecord {
      name: "Acme".into(),
      stages: "Seed, Series A".into(),
      markets: "Fintech".into(),
      geographies: "Unknown".into(),
      url: None,
    };
    assert_eq!(
      investor_description(&record),
      "Invests in Seed, Series A stage Fintech startups in Unknown."
    );
  }

  #[test]
  fn test_cache_clear() {
    let mut cache = DescriptionCache::from_entries(vec![("A".into(), "text".into())]);
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
  }
}
