#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use herald::DialogLevel;
use matchmaker::form::{Prompter, Screen};
use matchmaker::{Dataset, InvestorRecord, RankedHit, RankingError, RankingQuery, Reranker};
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn record(name: &str, stages: &str, markets: &str, geographies: &str, url: Option<&str>) -> InvestorRecord {
  InvestorRecord {
    name: name.to_string(),
    stages: stages.to_string(),
    markets: markets.to_string(),
    geographies: geographies.to_string(),
    url: url.map(str::to_string),
  }
}

/// Seed/Fintech/US, Series A/Fintech/EU, Seed/Healthcare/US
pub fn three_investors() -> Dataset {
  Dataset::from_records(vec![
    record("North Star", "Seed", "Fintech", "US", Some("https://northstar.vc")),
    record("Euro Growth", "Series A", "Fintech", "EU", Some("https://eurogrowth.eu")),
    record("Care Capital", "Seed", "Healthcare", "US", None),
  ])
}

/// Reranker stub that records every query it receives
pub struct StubReranker {
  response: Box<dyn Fn(&RankingQuery) -> Result<Vec<RankedHit>, RankingError> + Send + Sync>,
  pub calls: Mutex<Vec<RankingQuery>>,
}

impl StubReranker {
  pub fn returning(hits: Vec<(usize, f64)>) -> Self {
    let hits: Vec<RankedHit> =
      hits.into_iter().map(|(index, relevance_score)| RankedHit { index, relevance_score }).collect();
    Self { response: Box::new(move |_| Ok(hits.clone())), calls: Mutex::new(Vec::new()) }
  }

  /// Returns the first `top_n` documents in submission order with descending scores
  pub fn in_order() -> Self {
    Self {
      response: Box::new(|q| {
        Ok(
          (0..q.top_n)
            .map(|index| RankedHit { index, relevance_score: 1.0 - index as f64 * 0.1 })
            .collect(),
        )
      }),
      calls: Mutex::new(Vec::new()),
    }
  }

  pub fn failing(status: u16, body: &str) -> Self {
    let body = body.to_string();
    Self {
      response: Box::new(move |_| Err(RankingError::Status { status, body: body.clone() })),
      calls: Mutex::new(Vec::new()),
    }
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().unwrap().len()
  }

  pub fn last_query(&self) -> Option<RankingQuery> {
    self.calls.lock().unwrap().last().cloned()
  }
}

#[async_trait]
impl Reranker for StubReranker {
  async fn rerank(&self, query: RankingQuery) -> Result<Vec<RankedHit>, RankingError> {
    let result = (self.response)(&query);
    self.calls.lock().unwrap().push(query);
    result
  }
}

/// One scripted answer to a prompt
#[derive(Debug, Clone)]
pub enum Answer {
  Pick(Option<usize>),
  PickMany(Option<Vec<usize>>),
}

/// Prompter that replays answers in order and remembers what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
  answers: VecDeque<Answer>,
  pub prompts: Vec<String>,
  pub checked: Vec<Vec<bool>>,
}

impl ScriptedPrompter {
  pub fn new(answers: Vec<Answer>) -> Self {
    Self { answers: answers.into(), ..Default::default() }
  }
}

impl Prompter for ScriptedPrompter {
  fn select(&mut self, prompt: &str, _items: &[String], _default: usize) -> Result<Option<usize>> {
    self.prompts.push(prompt.to_string());
    match self.answers.pop_front() {
      Some(Answer::Pick(choice)) => Ok(choice),
      other => anyhow::bail!("unexpected select prompt {prompt:?}, scripted {other:?}"),
    }
  }

  fn multi_select(
    &mut self,
    prompt: &str,
    _items: &[String],
    checked: &[bool],
  ) -> Result<Option<Vec<usize>>> {
    self.prompts.push(prompt.to_string());
    self.checked.push(checked.to_vec());
    match self.answers.pop_front() {
      Some(Answer::PickMany(choice)) => Ok(choice),
      other => anyhow::bail!("unexpected multi-select prompt {prompt:?}, scripted {other:?}"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
  pub level: DialogLevel,
  pub title: String,
  pub message: String,
}

/// Screen that keeps everything it was asked to show
#[derive(Default)]
pub struct RecordingScreen {
  pub draws: Vec<(String, String)>,
  pub statuses: Vec<String>,
  pub dialogs: Vec<Shown>,
  pub windows: Vec<(String, String)>,
}

impl Screen for RecordingScreen {
  fn draw(&mut self, form: &str, results: &str) {
    self.draws.push((form.to_string(), results.to_string()));
  }

  fn status(&mut self, message: &str) {
    self.statuses.push(message.to_string());
  }

  fn dialog(&mut self, level: DialogLevel, title: &str, message: &str) {
    self.dialogs.push(Shown { level, title: title.to_string(), message: message.to_string() });
  }

  fn window(&mut self, title: &str, body: &str) {
    self.windows.push((title.to_string(), body.to_string()));
  }
}
