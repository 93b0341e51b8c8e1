use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "INVESTOR_MATCH_LOG";

#[derive(Parser, Debug)]
#[command(name = "investor-match")]
#[command(
  about = "Startup Investor Matcher - filter investors by stage, market and geography, then rank them against your startup"
)]
#[command(version)]
pub struct Cli {
  /// Configuration file (defaults to ./investor-match.json, then the user config directory)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Investor CSV to load instead of the bundled investors.csv
  #[arg(short, long)]
  pub data: Option<PathBuf>,

  /// Cohere API key
  #[arg(long, env = "COHERE_API_KEY", hide_env_values = true)]
  pub api_key: Option<String>,

  /// Log pipeline activity to stderr
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Layer command-line overrides onto a loaded config
  pub fn apply(&self, config: &mut Config) {
    if let Some(data) = &self.data {
      config.dataset_path = Some(data.clone());
    }
    if let Some(key) = &self.api_key {
      config.ranking.api_key = Some(key.clone());
    }
  }

  /// Default `tracing` directives for this invocation
  pub fn log_directives(&self) -> &'static str {
    if self.verbose {
      "matchmaker=debug,herald=debug,warn"
    } else {
      "off"
    }
  }
}
