//! Candidate filtering.
//!
//! An item survives when every token appears in at least one searchable field:
//! AND across tokens, OR across fields. Each token is checked independently,
//! so the retained set does not depend on token order.

use crate::catalog::CatalogItem;

/// Returns `true` if `token` is a substring of any lowercased searchable field.
pub(crate) fn matches_token(item: &CatalogItem, token: &str) -> bool {
    item.searchable_fields()
        .iter()
        .any(|field| field.contains(token))
}

/// Returns `true` if every token matches some field. Vacuously true for no tokens.
pub fn matches_all(item: &CatalogItem, tokens: &[String]) -> bool {
    tokens.iter().all(|token| matches_token(item, token))
}

/// Narrows the catalog to items matching every token, preserving catalog order.
///
/// An empty token list retains the whole catalog.
pub fn filter<'a>(catalog: &'a [CatalogItem], tokens: &[String]) -> Vec<&'a CatalogItem> {
    catalog
        .iter()
        .filter(|item| matches_all(item, tokens))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tokenize;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Lenzuolo in cotone", "Biancheria", "Zara Home", "letto", 29.9),
            CatalogItem::new("Piumino d'oca", "Biancheria", "Ikea", "inverno letto", 89.0),
            CatalogItem::new("Tazza", "Cucina", "", "", 4.5),
        ]
    }

    fn names<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
        items.iter().map(|item| item.name()).collect()
    }

    #[rstest]
    #[case("cotone", &["Lenzuolo in cotone"])]
    #[case("BIANCHERIA", &["Lenzuolo in cotone", "Piumino d'oca"])]
    #[case("letto ikea", &["Piumino d'oca"])]
    #[case("zara cucina", &[])]
    #[case("tazza", &["Tazza"])]
    #[case("oca", &["Piumino d'oca"])]
    fn test_filter(catalog: Vec<CatalogItem>, #[case] query: &str, #[case] expected: &[&str]) {
        let tokens = tokenize(query);
        check!(names(&filter(&catalog, &tokens)) == expected);
    }

    #[rstest]
    fn test_empty_tokens_is_identity(catalog: Vec<CatalogItem>) {
        let retained = filter(&catalog, &[]);
        check!(names(&retained) == ["Lenzuolo in cotone", "Piumino d'oca", "Tazza"]);
    }

    #[rstest]
    fn test_token_order_does_not_matter(catalog: Vec<CatalogItem>) {
        let forward = filter(&catalog, &tokenize("biancheria letto"));
        let backward = filter(&catalog, &tokenize("letto biancheria"));
        check!(names(&forward) == names(&backward));
    }

    #[rstest]
    fn test_filter_is_idempotent(catalog: Vec<CatalogItem>) {
        let tokens = tokenize("letto");
        let once: Vec<CatalogItem> = filter(&catalog, &tokens).into_iter().cloned().collect();
        let twice = filter(&once, &tokens);
        check!(names(&twice) == ["Lenzuolo in cotone", "Piumino d'oca"]);
    }

    #[test]
    fn test_empty_fields_never_match() {
        let item = CatalogItem::new("", "", "", "", "");
        check!(!matches_token(&item, "a"));
        check!(matches_all(&item, &[]));
    }
}
