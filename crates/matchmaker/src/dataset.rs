//! Investor dataset loading.
//!
//! The bundled `investors.csv` is read once at startup into [`InvestorRecord`]s. Header names are
//! whitespace-trimmed and any missing cell becomes the [`SENTINEL`] value, except the optional URL
//! column which is kept as `None` so it can be rendered as a placeholder later.

use std::path::{Path, PathBuf};

use crate::error::MatchError;

/// Substitute for a missing cell value
pub const SENTINEL: &str = "Unknown";

/// File name of the bundled dataset
pub const DATASET_FILE: &str = "investors.csv";

/// Bundled-resource directory searched beside the executable
pub const RESOURCE_DIR: &str = "resources";

/// The dataset shipped in the crate's source tree, used when nothing sits beside the executable
pub const SOURCE_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/investors.csv");

pub const NAME_COLUMN: &str = "Entity";
pub const STAGE_COLUMN: &str = "Stages of Investing";
pub const MARKET_COLUMN: &str = "Market";
pub const GEO_COLUMN: &str = "Geo";
pub const URL_COLUMN: &str = "URL";

/// Cell contents read back as missing
const MISSING_MARKERS: &[&str] = &[
  "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
  "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The three comma-delimited categorical fields a user can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Stage,
  Market,
  Geography,
}

impl Field {
  pub const ALL: [Field; 3] = [Field::Stage, Field::Market, Field::Geography];

  /// Column header in the dataset
  pub fn column(self) -> &'static str {
    match self {
      Field::Stage => STAGE_COLUMN,
      Field::Market => MARKET_COLUMN,
      Field::Geography => GEO_COLUMN,
    }
  }

  /// Human label used by the form
  pub fn label(self) -> &'static str {
    match self {
      Field::Stage => "Stage(s)",
      Field::Market => "Market(s)",
      Field::Geography => "Geography(ies)",
    }
  }
}

/// One investor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorRecord {
  pub name: String,
  pub stages: String,
  pub markets: String,
  pub geographies: String,
  pub url: Option<String>,
}

impl InvestorRecord {
  /// Raw cell text for a categorical field
  pub fn field(&self, field: Field) -> &str {
    match field {
      Field::Stage => &self.stages,
      Field::Market => &self.markets,
      Field::Geography => &self.geographies,
    }
  }
}

/// The loaded investor list, in file order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
  records: Vec<InvestorRecord>,
}

impl Dataset {
  pub fn from_records(records: Vec<InvestorRecord>) -> Self {
    Self { records }
  }

  /// Read a dataset from a CSV file
  pub fn load(path: &Path) -> Result<Self, MatchError> {
    if !path.is_file() {
      return Err(MatchError::dataset_not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
      .flexible(true)
      .from_path(path)
      .map_err(|e| MatchError::dataset_unreadable(path, e))?;

    let headers: Vec<String> = reader
      .headers()
      .map_err(|e| MatchError::dataset_unreadable(path, e))?
      .iter()
      .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
      .collect();
    let columns = ColumnIndex::new(&headers);

    let mut records = Vec::new();
    for result in reader.records() {
      let row = result.map_err(|e| MatchError::dataset_unreadable(path, e))?;
      records.push(columns.record(&row));
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded investor dataset");
    Ok(Self { records })
  }

  pub fn records(&self) -> &[InvestorRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

/// Positions of the known columns within a header row
struct ColumnIndex {
  name: Option<usize>,
  stages: Option<usize>,
  markets: Option<usize>,
  geographies: Option<usize>,
  url: Option<usize>,
}

impl ColumnIndex {
  fn new(headers: &[String]) -> Self {
    let find = |column: &str| headers.iter().position(|h| h == column);
    Self {
      name: find(NAME_COLUMN),
      stages: find(STAGE_COLUMN),
      markets: find(MARKET_COLUMN),
      geographies: find(GEO_COLUMN),
      url: find(URL_COLUMN),
    }
  }

  fn record(&self, row: &csv::StringRecord) -> InvestorRecord {
    let or_sentinel = |idx: Option<usize>| cell(row, idx).unwrap_or_else(|| SENTINEL.to_string());
    InvestorRecord {
      name: or_sentinel(self.name),
      stages: or_sentinel(self.stages),
      markets: or_sentinel(self.markets),
      geographies: or_sentinel(self.geographies),
      url: cell(row, self.url),
    }
  }
}

fn cell(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
  let value = row.get(idx?)?;
  if MISSING_MARKERS.contains(&value) {
    None
  } else {
    Some(value.to_string())
  }
}

/// Where the bundled dataset may live relative to the executable's directory, in search order
pub fn candidate_paths(base_dir: &Path) -> Vec<PathBuf> {
  vec![base_dir.join(DATASET_FILE), base_dir.join(RESOURCE_DIR).join(DATASET_FILE)]
}

/// First existing path in `candidates`, or the first candidate when none exists
pub fn locate(candidates: &[PathBuf]) -> PathBuf {
  candidates
    .iter()
    .find(|p| p.is_file())
    .or_else(|| candidates.first())
    .cloned()
    .unwrap_or_else(|| PathBuf::from(DATASET_FILE))
}

/// Dataset location beside the running executable, falling back to [`SOURCE_DATASET`]
pub fn default_location() -> PathBuf {
  let base_dir = std::env::current_exe()
    .ok()
    .and_then(|exe| exe.parent().map(Path::to_path_buf))
    .unwrap_or_else(|| PathBuf::from("."));
  let mut candidates = candidate_paths(&base_dir);
  candidates.push(PathBuf::from(SOURCE_DATASET));
  locate(&candidates)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::DatasetProblem;
  use std::fs;
  use tempfile::TempDir;

  fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(DATASET_FILE);
    fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn test_load_trims_headers_and_keeps_quoted_commas() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
      &dir,
      " Entity ,Stages of Investing , Market,Geo,URL\n\
       Acme Ventures,\"Seed, Series A\",Fintech,\"US, EU\",https://acme.vc\n",
    );

    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset.len(), 1);
    let record = &dataset.records()[0];
    assert_eq!(record.name, "Acme Ventures");
    assert_eq!(record.stages, "Seed, Series A");
    assert_eq!(record.geographies, "US, EU");
    assert_eq!(record.url.as_deref(), Some("https://acme.vc"));
  }

  #[test]
  fn test_missing_cells_become_sentinel() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
      &dir,
      "Entity,Stages of Investing,Market,Geo,URL\n\
       Quiet Capital,,Healthcare,NaN,\n\
       Short Row,Seed\n",
    );

    let dataset = Dataset::load(&path).unwrap();
    let quiet = &dataset.records()[0];
    assert_eq!(quiet.stages, SENTINEL);
    assert_eq!(quiet.geographies, SENTINEL);
    assert_eq!(quiet.url, None);

    let short = &dataset.records()[1];
    assert_eq!(short.stages, "Seed");
    assert_eq!(short.markets, SENTINEL);
    assert_eq!(short.url, None);
  }

  #[test]
  fn test_absent_url_column_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "Entity,Stages of Investing,Market,Geo\nA,Seed,AI,US\n");

    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset.records()[0].url, None);
  }

  #[test]
  fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");

    match Dataset::load(&path) {
      Err(MatchError::DatasetUnavailable { path: reported, problem }) => {
        assert_eq!(reported, path);
        assert_eq!(problem, DatasetProblem::NotFound);
      }
      other => panic!("expected DatasetUnavailable, got {other:?}"),
    }
  }

  #[test]
  fn test_locate_prefers_file_beside_executable() {
    let dir = TempDir::new().unwrap();
    let candidates = candidate_paths(dir.path());
    fs::create_dir(dir.path().join(RESOURCE_DIR)).unwrap();
    fs::write(dir.path().join(RESOURCE_DIR).join(DATASET_FILE), "Entity\n").unwrap();
    assert_eq!(locate(&candidates), dir.path().join(RESOURCE_DIR).join(DATASET_FILE));

    fs::write(dir.path().join(DATASET_FILE), "Entity\n").unwrap();
    assert_eq!(locate(&candidates), dir.path().join(DATASET_FILE));
  }

  #[test]
  fn test_locate_without_any_file_reports_first_candidate() {
    let dir = TempDir::new().unwrap();
    assert_eq!(locate(&candidate_paths(dir.path())), dir.path().join(DATASET_FILE));
  }

  #[test]
  fn test_locate_falls_back_to_source_tree_dataset() {
    let dir = TempDir::new().unwrap();
    let mut candidates = candidate_paths(dir.path());
    candidates.push(PathBuf::from(SOURCE_DATASET));
    assert_eq!(locate(&candidates), PathBuf::from(SOURCE_DATASET));
  }

  #[test]
  fn test_source_tree_dataset_loads() {
    let dataset = Dataset::load(Path::new(SOURCE_DATASET)).unwrap();
    assert!(!dataset.is_empty());
    assert!(dataset.records().iter().all(|r| r.name != SENTINEL));
  }

  #[test]
  fn test_spreadsheet_na_spellings_read_as_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
      &dir,
      "Entity,Stages of Investing,Market,Geo,URL\n\
       Odd Fund,None,#N/A N/A,-1.#IND,None\n\
       Other Fund,1.#QNAN,#NA,-1.#QNAN,1.#IND\n",
    );

    let dataset = Dataset::load(&path).unwrap();
    for record in dataset.records() {
      assert_eq!(record.stages, SENTINEL);
      assert_eq!(record.markets, SENTINEL);
      assert_eq!(record.geographies, SENTINEL);
      assert_eq!(record.url, None);
    }
  }
}
