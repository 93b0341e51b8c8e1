//! The investor search form.
//!
//! [`InvestorForm`] owns the widget state (three keyword lists, the count choice, the results pane
//! and the descriptions of the last search) and reacts to [`Action`]s. Input and output go through
//! the [`Prompter`] and [`Screen`] traits so the form runs the same against the terminal or a test
//! script.

use anyhow::Result;
use herald::DialogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::dataset::{Dataset, Field};
use crate::describe::DescriptionCache;
use crate::error::MatchError;
use crate::filter::FilterSelection;
use crate::options::FieldOptions;
use crate::pipeline::{parse_top_n, search};
use crate::ranking::Reranker;
use crate::render::{render_descriptions, render_results, DESCRIPTIONS_TITLE};

pub mod terminal;

pub use terminal::{DialoguerPrompter, TerminalScreen};

/// Fixed choices of the count widget
pub const TOP_N_CHOICES: [&str; 4] = ["5", "10", "15", "20"];

/// Source of user input
pub trait Prompter {
  /// Pick one item; `None` when the prompt is dismissed
  fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

  /// Pick any number of items, starting from `checked`; `None` when the prompt is dismissed
  fn multi_select(
    &mut self,
    prompt: &str,
    items: &[String],
    checked: &[bool],
  ) -> Result<Option<Vec<usize>>>;
}

/// Where the form shows itself
pub trait Screen {
  /// Redraw the form summary and the results pane
  fn draw(&mut self, form: &str, results: &str);
  /// Transient progress line
  fn status(&mut self, message: &str);
  /// Modal message
  fn dialog(&mut self, level: DialogLevel, title: &str, message: &str);
  /// Secondary read-only window
  fn window(&mut self, title: &str, body: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Choose(Field),
  ChooseCount,
  FindInvestors,
  ShowDescriptions,
  Quit,
}

impl Action {
  /// Menu entries, in display order
  pub const MENU: [Action; 7] = [
    Action::Choose(Field::Stage),
    Action::Choose(Field::Market),
    Action::Choose(Field::Geography),
    Action::ChooseCount,
    Action::FindInvestors,
    Action::ShowDescriptions,
    Action::Quit,
  ];

  pub fn label(self) -> String {
    match self {
      Action::Choose(field) => format!("Select Startup {}", field.label()),
      Action::ChooseCount => "Select number of top investors to show".to_string(),
      Action::FindInvestors => "Find Investors".to_string(),
      Action::ShowDescriptions => "Show Descriptions Sent to AI".to_string(),
      Action::Quit => "Quit".to_string(),
    }
  }
}

/// Startup settings for the form
#[derive(Debug, Clone)]
pub struct FormSettings {
  /// Initial value of the count widget
  pub top_n: String,
  /// Upper bound on one ranking call
  pub ranking_timeout: Duration,
}

pub struct InvestorForm {
  dataset: Dataset,
  options: FieldOptions,
  selection: FilterSelection,
  top_n: String,
  results: String,
  descriptions: DescriptionCache,
  reranker: Arc<dyn Reranker>,
  runtime: Handle,
  ranking_timeout: Duration,
}

impl InvestorForm {
  pub fn new(
    dataset: Dataset,
    reranker: Arc<dyn Reranker>,
    runtime: Handle,
    settings: FormSettings,
  ) -> Self {
    let options = FieldOptions::from_dataset(&dataset);
    Self {
      dataset,
      options,
      selection: FilterSelection::new(),
      top_n: settings.top_n,
      results: String::new(),
      descriptions: DescriptionCache::new(),
      reranker,
      runtime,
      ranking_timeout: settings.ranking_timeout,
    }
  }

  /// Event loop: draw, ask for an action, handle it, until the user quits
  pub fn run(&mut self, prompter: &mut dyn Prompter, screen: &mut dyn Screen) -> Result<()> {
    let labels: Vec<String> = Action::MENU.iter().map(|a| a.label()).collect();
    let default = Action::MENU.iter().position(|a| *a == Action::FindInvestors).unwrap_or(0);

    loop {
      screen.draw(&self.summary(), &self.results);
      let action = match prompter.select("What next?", &labels, default)? {
        Some(i) => Action::MENU[i],
        None => Action::Quit,
      };
      if !self.handle(action, prompter, screen)? {
        return Ok(());
      }
    }
  }

  /// Apply one action. Returns `false` once the form should close.
  pub fn handle(
    &mut self,
    action: Action,
    prompter: &mut dyn Prompter,
    screen: &mut dyn Screen,
  ) -> Result<bool> {
    match action {
      Action::Choose(field) => self.choose_keywords(field, prompter, screen)?,
      Action::ChooseCount => self.choose_count(prompter)?,
      Action::FindInvestors => self.find_investors(screen),
      Action::ShowDescriptions => self.show_descriptions(screen),
      Action::Quit => return Ok(false),
    }
    Ok(true)
  }

  fn choose_keywords(
    &mut self,
    field: Field,
    prompter: &mut dyn Prompter,
    screen: &mut dyn Screen,
  ) -> Result<()> {
    let options = self.options.for_field(field);
    if options.is_empty() {
      screen.dialog(
        DialogLevel::Info,
        "No Options",
        &format!("The investor list has no {} to choose from.", field.label()),
      );
      return Ok(());
    }

    let current = self.selection.keywords(field);
    let checked: Vec<bool> = options.iter().map(|o| current.contains(o)).collect();
    let prompt = Action::Choose(field).label();

    if let Some(mut picked) = prompter.multi_select(&prompt, options, &checked)? {
      picked.sort_unstable();
      picked.dedup();
      let keywords = picked.into_iter().filter_map(|i| options.get(i).cloned()).collect();
      self.selection.set_keywords(field, keywords);
    }
    Ok(())
  }

  fn choose_count(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
    let items: Vec<String> = TOP_N_CHOICES.iter().map(|c| c.to_string()).collect();
    let default = items.iter().position(|c| *c == self.top_n).unwrap_or(1);
    if let Some(i) = prompter.select(&Action::ChooseCount.label(), &items, default)? {
      self.top_n = items[i].clone();
    }
    Ok(())
  }

  /// "Find Investors": every failure ends in a dialog
  pub fn find_investors(&mut self, screen: &mut dyn Screen) {
    if let Err(e) = self.run_search(screen) {
      screen.dialog(e.level(), e.title(), &e.to_string());
    }
  }

  fn run_search(&mut self, screen: &mut dyn Screen) -> Result<(), MatchError> {
    let top_n = parse_top_n(&self.top_n)?;

    self.results.clear();
    self.descriptions.clear();

    screen.status("Finding investors...");
    // Blocks input until ranking completes or times out, so a second search cannot start meanwhile
    let pending = search(
      &self.dataset,
      &self.selection,
      top_n,
      Arc::clone(&self.reranker),
      self.ranking_timeout,
    );
    let result = self.runtime.block_on(pending)?;

    self.descriptions = result.descriptions;
    let investors = result.outcome?;
    self.results = render_results(&investors);
    Ok(())
  }

  /// "Show Descriptions Sent to AI"
  pub fn show_descriptions(&self, screen: &mut dyn Screen) {
    if self.descriptions.is_empty() {
      let e = MatchError::NoPriorSearch;
      screen.dialog(e.level(), e.title(), &e.to_string());
      return;
    }
    screen.window(DESCRIPTIONS_TITLE, &render_descriptions(&self.descriptions));
  }

  /// Current widget values as text
  pub fn summary(&self) -> String {
    let mut text = String::new();
    for field in Field::ALL {
      let keywords = self.selection.keywords(field);
      let shown = if keywords.is_empty() { "any".to_string() } else { keywords.join(", ") };
      text.push_str(&format!("{}: {}\n", Action::Choose(field).label(), shown));
    }
    text.push_str(&format!("Number of top investors to show: {}\n", self.top_n));
    text
  }

  pub fn options(&self) -> &FieldOptions {
    &self.options
  }

  pub fn selection(&self) -> &FilterSelection {
    &self.selection
  }

  pub fn set_keywords(&mut self, field: Field, keywords: Vec<String>) {
    self.selection.set_keywords(field, keywords);
  }

  pub fn top_n(&self) -> &str {
    &self.top_n
  }

  pub fn set_top_n(&mut self, value: impl Into<String>) {
    self.top_n = value.into();
  }

  /// Results pane contents
  pub fn results(&self) -> &str {
    &self.results
  }

  pub fn descriptions(&self) -> &DescriptionCache {
    &self.descriptions
  }
}
