//! Query tokenization.

/// Splits a raw query into lowercase tokens.
///
/// The query is lowercased, then split on runs of whitespace. Empty fragments are
/// discarded, duplicates are kept and order is preserved:
/// - `"Lenzuolo  Cotone"` → `["lenzuolo", "cotone"]`
/// - `"   "` → `[]`
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
