use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use matchmaker::cli::{Cli, LOG_ENV};
use matchmaker::form::{DialoguerPrompter, TerminalScreen};
use matchmaker::ranking::CohereReranker;
use matchmaker::{dataset, Config, Dataset, FormSettings, InvestorForm};

fn main() {
  let cli = Cli::parse();
  herald::init_tracing(LOG_ENV, cli.log_directives());

  if let Err(e) = run(cli) {
    herald::error(&format!("{e:#}"));
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let mut config = Config::load(cli.config.as_deref())?;
  cli.apply(&mut config);

  let path = config.dataset_path.clone().unwrap_or_else(dataset::default_location);
  let dataset = match Dataset::load(&path) {
    Ok(dataset) => dataset,
    Err(e) if e.is_fatal() => {
      herald::dialog(e.level(), e.title(), &e.to_string());
      herald::acknowledge();
      process::exit(1);
    }
    Err(e) => return Err(e.into()),
  };
  tracing::info!(rows = dataset.len(), path = %path.display(), "investor list ready");
  herald::success(&format!("Loaded {} investors from {}", dataset.len(), path.display()));

  if !config.ranking.has_api_key() {
    herald::warn("No Cohere API key configured. Set COHERE_API_KEY or pass --api-key to rank results.");
  }

  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()
    .context("Failed to start async runtime")?;
  let reranker = Arc::new(CohereReranker::new(config.ranking.clone())?);

  let settings = FormSettings {
    top_n: config.default_top_n.clone(),
    ranking_timeout: Duration::from_secs(config.ranking.timeout_secs),
  };
  let mut form = InvestorForm::new(dataset, reranker, runtime.handle().clone(), settings);
  form.run(&mut DialoguerPrompter::new(), &mut TerminalScreen::new())
}
