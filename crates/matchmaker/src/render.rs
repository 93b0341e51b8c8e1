use crate::describe::DescriptionCache;
use crate::pipeline::RankedInvestor;

/// Shown in place of a missing investor URL
pub const NO_URL: &str = "No URL";

/// Title of the descriptions window
pub const DESCRIPTIONS_TITLE: &str = "Investor Descriptions Sent to Cohere";

pub fn render_investor(investor: &RankedInvestor) -> String {
  format!(
    "{}. {} — Score: {:.2}\n{}\n\n",
    investor.rank,
    investor.name,
    investor.score,
    investor.url.as_deref().unwrap_or(NO_URL)
  )
}

/// Results pane text for a completed ranking
pub fn render_results(investors: &[RankedInvestor]) -> String {
  let mut text = format!("Top {} Matching Investors:\n", investors.len());
  text.push_str("Scores range from 0 to 1 (higher = better match).\n\n");
  for investor in investors {
    text.push_str(&render_investor(investor));
  }
  text
}

/// Body of the descriptions window, numbered from 1
pub fn render_descriptions(cache: &DescriptionCache) -> String {
  cache
    .entries()
    .iter()
    .enumerate()
    .map(|(i, (name, description))| format!("{}. {}:\n{}\n\n", i + 1, name, description))
    .collect()
}
