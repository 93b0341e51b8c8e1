//! Configuration management for investor-match
//!
//! Settings come from an optional JSON file. Every field has a default, so a partial file (or no
//! file at all) is valid. Command-line flags are applied on top by the binary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::form::TOP_N_CHOICES;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "investor-match.json";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// Explicit dataset location; resolved beside the executable when absent
  #[serde(default)]
  pub dataset_path: Option<PathBuf>,
  /// Count preselected in the form
  #[serde(default = "default_top_n")]
  pub default_top_n: String,
  #[serde(default)]
  pub ranking: RankingConfig,
}

/// Reranking service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
  #[serde(default = "default_base_url")]
  pub base_url: String,
  #[serde(default = "default_model")]
  pub model: String,
  /// Upper bound on one ranking call, in seconds
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default)]
  pub api_key: Option<String>,
}

fn default_top_n() -> String {
  "10".to_string()
}
fn default_base_url() -> String {
  "https://api.cohere.com".to_string()
}
fn default_model() -> String {
  "rerank-v3.5".to_string()
}
fn default_timeout_secs() -> u64 {
  30
}

impl RankingConfig {
  /// True when a non-blank API key is configured
  pub fn has_api_key(&self) -> bool {
    self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
  }
}

impl Default for RankingConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      model: default_model(),
      timeout_secs: default_timeout_secs(),
      api_key: None,
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self { dataset_path: None, default_top_n: default_top_n(), ranking: RankingConfig::default() }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Self = serde_json::from_str(&content)
      .with_context(|| format!("Invalid config file {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
  }

  /// Reject values the form cannot show
  pub fn validate(&self) -> Result<()> {
    if !TOP_N_CHOICES.contains(&self.default_top_n.as_str()) {
      bail!(
        "default_top_n must be one of {}, got {:?}",
        TOP_N_CHOICES.join(", "),
        self.default_top_n
      );
    }
    if self.ranking.timeout_secs == 0 {
      bail!("ranking.timeout_secs must be at least 1");
    }
    Ok(())
  }

  /// Load an explicit config file, else the first file found in `search_paths()`, else defaults
  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      return Self::load_from_file(path);
    }

    for path in Self::search_paths() {
      if path.is_file() {
        tracing::debug!(path = %path.display(), "using config file");
        return Self::load_from_file(&path);
      }
    }

    Ok(Self::default())
  }

  /// Implicit config locations, in priority order
  pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
      paths.push(config_dir.join("investor-match").join("config.json"));
    }
    paths
  }
}
