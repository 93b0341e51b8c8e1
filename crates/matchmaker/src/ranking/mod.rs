//! Reranking of candidate investors against the startup description.
//!
//! [`Reranker`] is the seam between the search pipeline and the external service. The production
//! implementation is [`CohereReranker`]; tests substitute stubs.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub mod cohere;

pub use cohere::CohereReranker;

/// One request to the reranker
#[derive(Debug, Clone, PartialEq)]
pub struct RankingQuery {
  /// Startup description
  pub query: String,
  /// Investor descriptions, in filtered order
  pub documents: Vec<String>,
  /// Number of results wanted, already capped at `documents.len()`
  pub top_n: usize,
}

/// A ranked document: its position in `RankingQuery::documents` and its score in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedHit {
  pub index: usize,
  pub relevance_score: f64,
}

#[derive(Error, Debug)]
pub enum RankingError {
  #[error("No API key configured. Set COHERE_API_KEY or pass --api-key.")]
  MissingApiKey,

  #[error("Request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Service returned status {status}: {body}")]
  Status { status: u16, body: String },

  #[error("Malformed response: {0}")]
  Malformed(String),

  #[error("No response within {0} seconds")]
  TimedOut(u64),

  #[error("Ranking task ended unexpectedly: {0}")]
  Interrupted(String),
}

/// Reorders documents by relevance to a query
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Reranker: Send + Sync {
  /// Returns at most `query.top_n` hits, most relevant first
  async fn rerank(&self, query: RankingQuery) -> Result<Vec<RankedHit>, RankingError>;
}

/// Run `reranker` on its own task and give up after `limit`.
///
/// A call that outlives `limit` is aborted and reported as [`RankingError::TimedOut`].
pub async fn rank_in_background(
  reranker: Arc<dyn Reranker>,
  query: RankingQuery,
  limit: Duration,
) -> Result<Vec<RankedHit>, RankingError> {
  let task = tokio::spawn(async move { reranker.rerank(query).await });
  let abort = task.abort_handle();

  match tokio::time::timeout(limit, task).await {
    Ok(Ok(result)) => result,
    Ok(Err(join_error)) => Err(RankingError::Interrupted(join_error.to_string())),
    Err(_) => {
      abort.abort();
      Err(RankingError::TimedOut(limit.as_secs()))
    }
  }
}

/// Reject hits that point outside the submitted documents
pub fn validate_hits(hits: &[RankedHit], document_count: usize) -> Result<(), RankingError> {
  match hits.iter().find(|hit| hit.index >= document_count) {
    Some(hit) => Err(RankingError::Malformed(format!(
      "result index {} is outside the {} submitted documents",
      hit.index, document_count
    ))),
    None => Ok(()),
  }
}
