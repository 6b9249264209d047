//! Catalog search: tokenization, filtering, scoring and ranking.
//!
//! ```text
//! query ─▶ tokenize ─▶ filter ─▶ score ─▶ rank ─▶ results
//! ```
//!
//! Every stage is a pure function over a borrowed catalog.

pub mod filter;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod tokenize;

pub use filter::{filter, matches_all};
pub use query::{SearchOptions, search, search_with};
pub use ranking::{ScoredResult, compare_results, rank};
pub use scoring::{MatchReason, MatchTrace, score, score_value};
pub use tokenize::tokenize;
