//! Search orchestration: filter, describe, rank.

use std::sync::Arc;
use std::time::Duration;

use crate::dataset::{Dataset, InvestorRecord};
use crate::describe::{investor_description, startup_description, DescriptionCache};
use crate::error::MatchError;
use crate::filter::{filter, FilterSelection};
use crate::ranking::{rank_in_background, validate_hits, RankedHit, RankingQuery, Reranker};

/// Parse the count widget's value. Only positive integers are accepted.
pub fn parse_top_n(value: &str) -> Result<usize, MatchError> {
  match value.trim().parse::<usize>() {
    Ok(n) if n > 0 => Ok(n),
    _ => Err(MatchError::invalid_count(value)),
  }
}

/// Filtered candidates plus everything needed to rank them
#[derive(Debug, Clone)]
pub struct PreparedSearch {
  pub query: RankingQuery,
  pub candidates: Vec<InvestorRecord>,
  pub descriptions: DescriptionCache,
}

/// Filter the dataset and build the ranking request.
///
/// Fails with [`MatchError::NoMatches`] when nothing survives the filter, before any ranking work.
pub fn prepare(
  dataset: &Dataset,
  selection: &FilterSelection,
  top_n: usize,
) -> Result<PreparedSearch, MatchError> {
  let candidates: Vec<InvestorRecord> = filter(dataset, selection).into_iter().cloned().collect();
  if candidates.is_empty() {
    return Err(MatchError::NoMatches);
  }

  let documents: Vec<String> = candidates.iter().map(investor_description).collect();
  let descriptions = DescriptionCache::from_entries(
    candidates.iter().map(|r| r.name.clone()).zip(documents.iter().cloned()).collect(),
  );
  let query = RankingQuery {
    query: startup_description(selection),
    top_n: top_n.min(documents.len()),
    documents,
  };

  tracing::debug!(
    candidates = candidates.len(),
    requested = top_n,
    effective = query.top_n,
    "prepared search"
  );
  Ok(PreparedSearch { query, candidates, descriptions })
}

/// A ranked investor ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedInvestor {
  /// 1-based position in the ranking
  pub rank: usize,
  pub name: String,
  pub url: Option<String>,
  pub score: f64,
}

impl PreparedSearch {
  /// Map reranker hits back onto the candidates they index
  pub fn assemble(&self, hits: &[RankedHit]) -> Result<Vec<RankedInvestor>, MatchError> {
    validate_hits(hits, self.candidates.len())?;
    Ok(
      hits
        .iter()
        .enumerate()
        .map(|(i, hit)| {
          let record = &self.candidates[hit.index];
          RankedInvestor {
            rank: i + 1,
            name: record.name.clone(),
            url: record.url.clone(),
            score: hit.relevance_score,
          }
        })
        .collect(),
    )
  }
}

/// What one completed search leaves behind.
///
/// `descriptions` holds what was sent to the reranker even when `outcome` is an error.
#[derive(Debug)]
pub struct SearchResult {
  pub descriptions: DescriptionCache,
  pub outcome: Result<Vec<RankedInvestor>, MatchError>,
}

/// Run one search end to end.
///
/// Returns `Err` only when the search stops before ranking (no matches). Ranking failures are
/// reported through `SearchResult::outcome`.
pub async fn search(
  dataset: &Dataset,
  selection: &FilterSelection,
  top_n: usize,
  reranker: Arc<dyn Reranker>,
  limit: Duration,
) -> Result<SearchResult, MatchError> {
  let prepared = prepare(dataset, selection, top_n)?;
  let outcome = match rank_in_background(reranker, prepared.query.clone(), limit).await {
    Ok(hits) => prepared.assemble(&hits),
    Err(e) => Err(MatchError::from(e)),
  };
  Ok(SearchResult { descriptions: prepared.descriptions, outcome })
}
