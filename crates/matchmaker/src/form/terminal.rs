use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};
use herald::DialogLevel;

use super::{Prompter, Screen};

const TITLE: &str = "Startup Investor Matcher";
const WIDTH: usize = 72;

/// Interactive prompts on the controlling terminal
pub struct DialoguerPrompter {
  theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl DialoguerPrompter {
  pub fn new() -> Self {
    Self { theme: ColorfulTheme::default() }
  }
}

impl Prompter for DialoguerPrompter {
  fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
    let choice = Select::with_theme(&self.theme)
      .with_prompt(prompt)
      .items(items)
      .default(default)
      .interact_opt()?;
    Ok(choice)
  }

  fn multi_select(
    &mut self,
    prompt: &str,
    items: &[String],
    checked: &[bool],
  ) -> Result<Option<Vec<usize>>> {
    let entries: Vec<(&str, bool)> =
      items.iter().map(String::as_str).zip(checked.iter().copied()).collect();
    let picked = MultiSelect::with_theme(&self.theme)
      .with_prompt(format!("{prompt} (space toggles, enter confirms)"))
      .items_checked(&entries)
      .interact_opt()?;
    Ok(picked)
  }
}

/// Full-screen rendering on stdout, dialogs on stderr
pub struct TerminalScreen {
  term: Term,
}

impl Default for TerminalScreen {
  fn default() -> Self {
    Self::new()
  }
}

impl TerminalScreen {
  pub fn new() -> Self {
    Self { term: Term::stdout() }
  }
}

impl Screen for TerminalScreen {
  fn draw(&mut self, form: &str, results: &str) {
    let _ = self.term.clear_screen();
    herald::as_banner(
      |line| {
        let _ = self.term.write_line(&style(line).bold().to_string());
      },
      TITLE,
      Some(WIDTH),
      Some('='),
    );
    let _ = self.term.write_str(form);
    let _ = self.term.write_line("");
    if !results.is_empty() {
      let _ = self.term.write_line(&herald::banner_line(WIDTH, '-'));
      let _ = self.term.write_str(results);
      let _ = self.term.write_line(&herald::banner_line(WIDTH, '-'));
    }
  }

  fn status(&mut self, message: &str) {
    herald::info(message);
  }

  fn dialog(&mut self, level: DialogLevel, title: &str, message: &str) {
    herald::dialog(level, title, message);
    herald::acknowledge();
  }

  fn window(&mut self, title: &str, body: &str) {
    let _ = self.term.clear_screen();
    let _ = self.term.write_str(&herald::render_window(title, body, WIDTH));
    herald::acknowledge();
  }
}
