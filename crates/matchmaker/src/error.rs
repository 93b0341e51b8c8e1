use herald::DialogLevel;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ranking::RankingError;

/// Why the investor file could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetProblem {
  NotFound,
  Unreadable(String),
}

/// Everything that can stop a search or the application.
///
/// The `Display` text is the message shown in the dialog; `title()` is its heading.
#[derive(Error, Debug)]
pub enum MatchError {
  #[error("{}", dataset_message(path, problem))]
  DatasetUnavailable { path: PathBuf, problem: DatasetProblem },

  #[error("Please select a valid number of top investors.")]
  InvalidCount { value: String },

  #[error("No investors matched your criteria. Try broader filters.")]
  NoMatches,

  #[error("Error calling Cohere API:\n{0}")]
  RankingService(#[from] RankingError),

  #[error("Please run a search first.")]
  NoPriorSearch,
}

fn dataset_message(path: &Path, problem: &DatasetProblem) -> String {
  match problem {
    DatasetProblem::NotFound => {
      let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
      format!("Could not find {} at {}", name.as_deref().unwrap_or("investors.csv"), path.display())
    }
    DatasetProblem::Unreadable(reason) => {
      format!("Could not read {}:\n{}", path.display(), reason)
    }
  }
}

impl MatchError {
  pub fn dataset_not_found(path: impl Into<PathBuf>) -> Self {
    Self::DatasetUnavailable { path: path.into(), problem: DatasetProblem::NotFound }
  }

  pub fn dataset_unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
    Self::DatasetUnavailable {
      path: path.into(),
      problem: DatasetProblem::Unreadable(reason.to_string()),
    }
  }

  pub fn invalid_count(value: impl Into<String>) -> Self {
    Self::InvalidCount { value: value.into() }
  }

  /// Dialog heading for this error
  pub fn title(&self) -> &'static str {
    match self {
      MatchError::DatasetUnavailable { .. } => "Error",
      MatchError::InvalidCount { .. } => "Input Error",
      MatchError::NoMatches => "No Matches",
      MatchError::RankingService(_) => "API Error",
      MatchError::NoPriorSearch => "No Data",
    }
  }

  pub fn level(&self) -> DialogLevel {
    match self {
      MatchError::NoMatches | MatchError::NoPriorSearch => DialogLevel::Info,
      _ => DialogLevel::Error,
    }
  }

  /// Only a missing or unreadable dataset ends the process
  pub fn is_fatal(&self) -> bool {
    matches!(self, MatchError::DatasetUnavailable { .. })
  }
}
