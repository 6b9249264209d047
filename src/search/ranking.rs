//! Result ranking.
//!
//! Results are ordered by score, highest first. Ties keep the order they had on
//! input, which is catalog order after filtering, so rankings are reproducible.

use crate::catalog::CatalogItem;
use crate::search::scoring::MatchTrace;
use serde::Serialize;
use std::cmp::Ordering;

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult<'a> {
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    pub score: u32,
    /// Empty when the search ran without tracing.
    pub trace: MatchTrace,
}

/// Compare two results for ranking: higher score first.
pub fn compare_results(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Stable sort by score descending.
pub fn rank(mut scored: Vec<ScoredResult<'_>>) -> Vec<ScoredResult<'_>> {
    // `sort_by` is stable; equal scores keep their input order.
    scored.sort_by(compare_results);
    scored
}
