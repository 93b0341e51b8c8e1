//! Startup investor matching.
//!
//! Load an investor list, narrow it by stage, market and geography, and let a reranking service
//! order the survivors by relevance to a one-sentence description of the startup.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod describe;
pub mod error;
pub mod filter;
pub mod form;
pub mod options;
pub mod pipeline;
pub mod ranking;
pub mod render;

pub use config::Config;
pub use dataset::{Dataset, Field, InvestorRecord};
pub use describe::DescriptionCache;
pub use error::MatchError;
pub use filter::FilterSelection;
pub use form::{FormSettings, InvestorForm};
pub use pipeline::{RankedInvestor, SearchResult};
pub use ranking::{RankedHit, RankingError, RankingQuery, Reranker};
