//! The search pipeline: tokenize, filter, score, rank.

use crate::catalog::CatalogItem;
use crate::search::{
    filter::filter,
    ranking::{ScoredResult, rank},
    scoring::{MatchTrace, score, score_value},
    tokenize::tokenize,
};
use std::time::Instant;

/// Per-call search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Record which scoring rules fired for each result.
    pub trace: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { trace: true }
    }
}

impl SearchOptions {
    /// Skip building match traces.
    pub const fn untraced() -> Self {
        Self { trace: false }
    }
}

/// Rank catalog items against a free-text query, with match traces.
pub fn search<'a>(catalog: &'a [CatalogItem], query: &str) -> Vec<ScoredResult<'a>> {
    search_with(catalog, query, &SearchOptions::default())
}

/// Rank catalog items against a free-text query.
///
/// An empty query returns the whole catalog with score 0 in catalog order.
pub fn search_with<'a>(
    catalog: &'a [CatalogItem],
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredResult<'a>> {
    let start = Instant::now();
    let tokens = tokenize(query);
    tracing::debug!("Search terms: {:?}", tokens);

    let candidates = filter(catalog, &tokens);
    tracing::debug!(
        "{} of {} items match all terms",
        candidates.len(),
        catalog.len()
    );

    if candidates.is_empty() {
        tracing::info!("No results for query '{}' in {:?}", query, start.elapsed());
        return Vec::new();
    }

    let scored = score_candidates(&candidates, &tokens, options);
    let ranked = rank(scored);

    tracing::info!(
        "Ranked {} results for query '{}' in {:?}",
        ranked.len(),
        query,
        start.elapsed()
    );

    ranked
}

fn score_one<'a>(
    item: &'a CatalogItem,
    tokens: &[String],
    options: &SearchOptions,
) -> ScoredResult<'a> {
    let (score, trace) = if options.trace {
        score(item, tokens)
    } else {
        (score_value(item, tokens), MatchTrace::default())
    };

    ScoredResult { item, score, trace }
}

/// Score every candidate. Output order matches `candidates`.
#[cfg(feature = "parallel")]
fn score_candidates<'a>(
    candidates: &[&'a CatalogItem],
    tokens: &[String],
    options: &SearchOptions,
) -> Vec<ScoredResult<'a>> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|&item| score_one(item, tokens, options))
        .collect()
}

/// Score every candidate. Output order matches `candidates`.
#[cfg(not(feature = "parallel"))]
fn score_candidates<'a>(
    candidates: &[&'a CatalogItem],
    tokens: &[String],
    options: &SearchOptions,
) -> Vec<ScoredResult<'a>> {
    candidates
        .iter()
        .map(|&item| score_one(item, tokens, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Federa cotone", "Biancheria", "Ikea", "cuscino", 7.0),
            CatalogItem::new("Lenzuolo in cotone", "Biancheria", "Zara Home", "letto", 29.9),
            CatalogItem::new("Tovaglia", "Cucina", "Zara Home", "cotone tavola", 15.0),
            CatalogItem::new("Piumino", "Biancheria", "Ikea", "inverno", 89.0),
        ]
    }

    fn names<'a>(results: &[ScoredResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.item.name()).collect()
    }

    #[rstest]
    fn test_search_orders_by_score(catalog: Vec<CatalogItem>) {
        let results = search(&catalog, "cotone");
        // Federa: name+exact+bonus = 7, Lenzuolo: 7, Tovaglia: keywords = 1
        check!(names(&results) == ["Federa cotone", "Lenzuolo in cotone", "Tovaglia"]);
        check!(results.iter().map(|r| r.score).collect::<Vec<_>>() == [7, 7, 1]);
    }

    #[rstest]
    fn test_search_worked_example(catalog: Vec<CatalogItem>) {
        let results = search(&catalog, "Lenzuolo Cotone");
        check!(results.len() == 1);
        check!(results[0].score == 12);
        check!(results[0].trace.total() == 12);
    }

    #[rstest]
    fn test_no_results_is_empty(catalog: Vec<CatalogItem>) {
        check!(search(&catalog, "divano").is_empty());
        check!(search(&[], "cotone").is_empty());
    }

    #[rstest]
    fn test_empty_query_returns_catalog_in_order(catalog: Vec<CatalogItem>) {
        let results = search(&catalog, "   ");
        check!(results.len() == catalog.len());
        check!(results.iter().all(|r| r.score == 0 && r.trace.is_empty()));
        check!(names(&results)[0] == "Federa cotone");
    }

    #[rstest]
    fn test_untraced_search_has_same_ranking(catalog: Vec<CatalogItem>) {
        let traced = search(&catalog, "biancheria ikea");
        let untraced = search_with(&catalog, "biancheria ikea", &SearchOptions::untraced());

        check!(names(&traced) == names(&untraced));
        check!(untraced.iter().all(|r| r.trace.is_empty()));
        check!(traced.iter().all(|r| !r.trace.is_empty()));
    }
}
