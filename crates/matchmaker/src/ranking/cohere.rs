//! HTTP client for the Cohere rerank API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{validate_hits, RankedHit, RankingError, RankingQuery, Reranker};
use crate::config::RankingConfig;

#[derive(Serialize)]
struct RerankRequest<'a> {
  model: &'a str,
  query: &'a str,
  documents: &'a [String],
  top_n: usize,
}

#[derive(Deserialize)]
struct RerankResponse {
  results: Vec<RerankResult>,
}

#[derive(Deserialize)]
struct RerankResult {
  index: usize,
  relevance_score: f64,
}

/// Reranker backed by `POST {base_url}/v2/rerank`
pub struct CohereReranker {
  client: Client,
  config: RankingConfig,
}

impl CohereReranker {
  pub fn new(config: RankingConfig) -> Result<Self, RankingError> {
    let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
    Ok(Self { client, config })
  }

  fn endpoint(&self) -> String {
    format!("{}/v2/rerank", self.config.base_url.trim_end_matches('/'))
  }
}

#[async_trait]
impl Reranker for CohereReranker {
  async fn rerank(&self, query: RankingQuery) -> Result<Vec<RankedHit>, RankingError> {
    let api_key = self
      .config
      .api_key
      .as_deref()
      .filter(|key| !key.trim().is_empty())
      .ok_or(RankingError::MissingApiKey)?;

    let request = RerankRequest {
      model: &self.config.model,
      query: &query.query,
      documents: &query.documents,
      top_n: query.top_n,
    };

    tracing::debug!(documents = query.documents.len(), top_n = query.top_n, "sending rerank request");
    let response =
      self.client.post(self.endpoint()).bearer_auth(api_key).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      tracing::debug!(status = status.as_u16(), "rerank request rejected");
      return Err(RankingError::Status { status: status.as_u16(), body });
    }

    let body = response.text().await?;
    let parsed: RerankResponse =
      serde_json::from_str(&body).map_err(|e| RankingError::Malformed(e.to_string()))?;

    let hits: Vec<RankedHit> = parsed
      .results
      .into_iter()
      .map(|r| RankedHit { index: r.index, relevance_score: r.relevance_score })
      .collect();
    validate_hits(&hits, query.documents.len())?;

    tracing::debug!(hits = hits.len(), "rerank request succeeded");
    Ok(hits)
  }
}
