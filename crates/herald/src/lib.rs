//! ## Features
//!
//! - Prefixed log lines on stderr (info, warn, error, success)
//! - Multi-line message support with consistent formatting
//! - Banner and window panes for larger blocks of text
//! - Boxed dialog notices that stand in for modal message boxes
//! - `tracing` subscriber setup shared by the binaries
//!
//! ## Usage
//!
//! Log lines: `info()`, `warn()`, `error()`, `success()`
//!
//! Dialogs: `dialog()` draws a titled box, `acknowledge()` waits for Enter when attached to a terminal.

use colored::*;
use console::{measure_text_width, Term};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Core logging function that handles the actual output
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a colored prefix for log messages
fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

/// One prefixed line per line of `message`
fn prefixed_lines(color: Color, prefix: &str, message: &str) -> Vec<String> {
  let prefix = format_prefix(color, prefix);
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

fn log_prefixed(color: Color, prefix: &str, message: &str) {
  for line in prefixed_lines(color, prefix, message) {
    log(&line);
  }
}

/// Create a banner line of the specified length and character
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

/// Display a message with a banner around it
pub fn as_banner<F>(log_fn: F, message: &str, width: Option<usize>, border_char: Option<char>)
where
  F: Fn(&str),
{
  let width = width.unwrap_or(50);
  let border_char = border_char.unwrap_or('=');

  let banner = banner_line(width, border_char);

  log_fn(&banner);
  log_fn(message);
  log_fn(&banner);
}

/// Info level logging - general information
pub fn info(message: &str) {
  log_prefixed(Color::Blue, "info", message);
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  log_prefixed(Color::Yellow, "warn", message);
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  log_prefixed(Color::Red, "error", message);
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  log_prefixed(Color::Green, "sccs", message);
}

/// Severity of a dialog box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
  Info,
  Error,
}

impl DialogLevel {
  fn color(self) -> Color {
    match self {
      DialogLevel::Info => Color::Blue,
      DialogLevel::Error => Color::Red,
    }
  }
}

/// Lay out a titled box around `message`. The result is uncolored.
pub fn render_dialog(title: &str, message: &str) -> Vec<String> {
  let body: Vec<&str> = if message.is_empty() { vec![""] } else { message.lines().collect() };
  let inner = body
    .iter()
    .map(|line| measure_text_width(line))
    .chain(std::iter::once(measure_text_width(title) + 2))
    .max()
    .unwrap_or(0);

  let mut lines = Vec::with_capacity(body.len() + 2);
  let title_fill = inner - measure_text_width(title) - 1;
  lines.push(format!("┌─ {title} {}┐", banner_line(title_fill, '─')));
  for line in body {
    let pad = inner - measure_text_width(line);
    lines.push(format!("│ {line}{} │", " ".repeat(pad)));
  }
  lines.push(format!("└{}┘", banner_line(inner + 2, '─')));
  lines
}

/// Draw a dialog box on stderr
pub fn dialog(level: DialogLevel, title: &str, message: &str) {
  let color = level.color();
  let lines = render_dialog(title, message);
  let last = lines.len() - 1;
  for (i, line) in lines.iter().enumerate() {
    if i == 0 || i == last {
      log(&line.color(color).bold().to_string());
    } else {
      log(line);
    }
  }
}

/// Block until the user presses Enter. Returns immediately when stderr is not a terminal.
pub fn acknowledge() {
  let term = Term::stderr();
  if !term.is_term() {
    return;
  }
  let _ = term.write_line(&"press Enter to continue".dimmed().to_string());
  let _ = term.read_line();
}

/// Render a titled pane, the terminal counterpart of a secondary window
pub fn render_window(title: &str, body: &str, width: usize) -> String {
  let mut out = String::new();
  let border = banner_line(width, '═');
  out.push_str(&border);
  out.push('\n');
  out.push_str(title);
  out.push('\n');
  out.push_str(&border);
  out.push('\n');
  out.push_str(body);
  if !body.ends_with('\n') {
    out.push('\n');
  }
  out.push_str(&border);
  out.push('\n');
  out
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `env_var` names an environment variable whose value, when set, replaces `default_directives`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(env_var: &str, default_directives: &str) {
  let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new(default_directives));
  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
    .with(filter)
    .try_init();
}
