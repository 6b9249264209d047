//! Output formatting for prices and ranked results.

use crate::catalog::{CatalogItem, Price};
use crate::search::{ScoredResult, SearchOptions, search_with};
use std::fmt::Write as _;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY: &str = "€";

/// Shown instead of results when the query has no terms.
pub const EMPTY_QUERY_PROMPT: &str = "Enter a search term to begin";

/// Format a price with the default currency symbol.
///
/// - `19.5` → `€19.50`
/// - `"7"` → `€7.00`
/// - `"not-a-number"` → `not-a-number`
pub fn format_price(raw: &Price) -> String {
    format_price_with(raw, DEFAULT_CURRENCY)
}

/// Format a price with two fractional digits, falling back to the raw text.
///
/// Text is trimmed before parsing. Non-finite values (`NaN`, `inf`) are not
/// treated as prices and fall back like any other unparseable input.
pub fn format_price_with(raw: &Price, symbol: &str) -> String {
    let parsed = match raw {
        Price::Number(n) => Some(*n),
        Price::Text(text) => text.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(value) if value.is_finite() => format!("{}{:.2}", symbol, value),
        _ => raw.to_string(),
    }
}

/// Rendering switches for text output.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub currency: String,
    /// Show the relevance score of each result.
    pub scores: bool,
    /// Show the match trace of each result.
    pub trace: bool,
}

/// Format ranked results into a readable string output.
pub fn format_results(
    results: &[ScoredResult<'_>],
    query: &str,
    display: &DisplayOptions,
) -> String {
    if results.is_empty() {
        return format!("No products found for '{}'\n", query);
    }

    let mut output = format!("Results ({} products)\n\n", results.len());

    for (idx, result) in results.iter().enumerate() {
        let item = result.item;
        let _ = writeln!(output, "{}. {}", idx + 1, item.name());
        let _ = writeln!(output, "   {}", byline(item));
        let _ = writeln!(
            output,
            "   {}",
            format_price_with(item.price(), &display.currency)
        );

        if display.scores {
            let _ = writeln!(output, "   relevance: {}", result.score);
        }
        if display.trace {
            for reason in &result.trace {
                let _ = writeln!(output, "   - {}", reason);
            }
        }

        output.push('\n');
    }

    output
}

/// Render ranked results as a pretty-printed JSON array.
pub fn format_results_json(results: &[ScoredResult<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Search `items` for `query` and render what the binary prints.
///
/// A blank query never reaches the search: text output is the prompt, JSON
/// output an empty array.
pub fn render_search(
    items: &[CatalogItem],
    query: &str,
    display: &DisplayOptions,
    json: bool,
) -> serde_json::Result<String> {
    if query.trim().is_empty() {
        return Ok(if json {
            format!("{}\n", format_results_json(&[])?)
        } else {
            format!("{}\n", EMPTY_QUERY_PROMPT)
        });
    }

    let options = SearchOptions {
        trace: display.trace || json,
    };
    let results = search_with(items, query, &options);

    if json {
        Ok(format!("{}\n", format_results_json(&results)?))
    } else {
        Ok(format_results(&results, query, display))
    }
}

/// Render the loaded catalog as a tab-separated table.
pub fn format_catalog(items: &[CatalogItem]) -> String {
    let mut output = String::from("name\tcategory\tbrand\tkeywords\tprice\n");
    for item in items {
        let _ = writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}",
            item.name(),
            item.category(),
            item.brand(),
            item.keywords(),
            item.price()
        );
    }
    output
}

/// `category • brand`, dropping whichever part is empty.
fn byline(item: &CatalogItem) -> String {
    match (item.category().is_empty(), item.brand().is_empty()) {
        (false, false) => format!("{} • {}", item.category(), item.brand()),
        (false, true) => item.category().to_string(),
        (true, false) => item.brand().to_string(),
        (true, true) => String::new(),
    }
}
