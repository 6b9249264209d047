//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `home_catalog`: a small household-linen catalog built in memory
//! - `catalog_file`: the same catalog written to a temporary JSON file
//!
//! [`TempCatalog`] keeps the temporary directory alive for as long as the
//! test holds it.

use catalog_search::CatalogItem;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raw JSON for the household catalog, using the spreadsheet column names.
#[allow(dead_code)] // Used by catalog_test.rs only
pub const HOME_CATALOG_JSON: &str = r#"[
    {"item_name": "Lenzuolo in cotone", "category": "Biancheria", "brand": "Zara Home",
     "generic_keywords": "letto matrimoniale", "sale_price": 29.9},
    {"item_name": "Federa cotone", "category": "Biancheria", "brand": "Ikea",
     "generic_keywords": "cuscino", "sale_price": "7"},
    {"item_name": "Piumino d'oca", "category": "Biancheria", "brand": "Ikea",
     "generic_keywords": "inverno letto", "sale_price": 89},
    {"item_name": "Tovaglia", "category": "Cucina", "brand": null,
     "generic_keywords": "cotone tavola", "sale_price": "prezzo su richiesta"},
    {"item_name": "Cotone idrofilo", "category": "Bagno", "brand": "Cotonella",
     "sale_price": 2.5}
]"#;

/// The household catalog as items, matching [`HOME_CATALOG_JSON`].
#[fixture]
pub fn home_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "Lenzuolo in cotone",
            "Biancheria",
            "Zara Home",
            "letto matrimoniale",
            29.9,
        ),
        CatalogItem::new("Federa cotone", "Biancheria", "Ikea", "cuscino", "7"),
        CatalogItem::new("Piumino d'oca", "Biancheria", "Ikea", "inverno letto", 89.0),
        CatalogItem::new("Tovaglia", "Cucina", "", "cotone tavola", "prezzo su richiesta"),
        CatalogItem::new("Cotone idrofilo", "Bagno", "Cotonella", "", 2.5),
    ]
}

/// A catalog file inside a temporary directory.
#[allow(dead_code)] // Used by catalog_test.rs only
pub struct TempCatalog {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Used by catalog_test.rs only
impl TempCatalog {
    /// Writes `content` to `catalog.json` in a fresh temp directory.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn with_content(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The household catalog written to disk.
#[fixture]
#[allow(dead_code)] // Used by catalog_test.rs only
pub fn catalog_file() -> TempCatalog {
    TempCatalog::with_content(HOME_CATALOG_JSON)
}

/// Names of ranked results, in order.
#[allow(dead_code)] // Used across different integration test crates
pub fn names<'a>(results: &[catalog_search::ScoredResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.name()).collect()
}
