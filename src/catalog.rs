//! Catalog records and the JSON catalog loader.
//!
//! The loader normalizes every record before it reaches the search pipeline:
//! missing or `null` cells become empty strings, scalar cells are stringified,
//! and the four searchable fields are lowercased once so that matching never
//! re-lowercases per query.

use crate::error::CatalogError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::{fmt, path::Path, time::Instant};

/// Column names accepted for each field. The first entry is the canonical one.
const NAME_KEYS: &[&str] = &["item_name", "name"];
const CATEGORY_KEYS: &[&str] = &["category"];
const BRAND_KEYS: &[&str] = &["brand"];
const KEYWORDS_KEYS: &[&str] = &["generic_keywords", "keywords"];
const PRICE_KEYS: &[&str] = &["sale_price", "price"];

/// Raw price cell. Opaque to filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Lowercased copies of the searchable fields.
#[derive(Debug, Clone)]
struct Searchable {
    name: String,
    category: String,
    brand: String,
    keywords: String,
}

/// An immutable catalog record.
///
/// Display fields keep their loaded casing; matching goes through the lowercased
/// accessors (`*_lower`).
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    name: String,
    category: String,
    brand: String,
    keywords: String,
    price: Price,
    #[serde(skip)]
    searchable: Searchable,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        keywords: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        let name = name.into();
        let category = category.into();
        let brand = brand.into();
        let keywords = keywords.into();
        let searchable = Searchable {
            name: name.to_lowercase(),
            category: category.to_lowercase(),
            brand: brand.to_lowercase(),
            keywords: keywords.to_lowercase(),
        };

        Self {
            name,
            category,
            brand,
            keywords,
            price: price.into(),
            searchable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub(crate) fn name_lower(&self) -> &str {
        &self.searchable.name
    }

    pub(crate) fn category_lower(&self) -> &str {
        &self.searchable.category
    }

    pub(crate) fn brand_lower(&self) -> &str {
        &self.searchable.brand
    }

    pub(crate) fn keywords_lower(&self) -> &str {
        &self.searchable.keywords
    }

    /// Lowercased searchable fields in filter order.
    pub(crate) fn searchable_fields(&self) -> [&str; 4] {
        [
            self.name_lower(),
            self.category_lower(),
            self.brand_lower(),
            self.keywords_lower(),
        ]
    }

    /// Build an item from one JSON record, normalizing missing cells.
    fn from_record(record: &Map<String, Value>) -> Self {
        Self::new(
            text_cell(record, NAME_KEYS),
            text_cell(record, CATEGORY_KEYS),
            text_cell(record, BRAND_KEYS),
            text_cell(record, KEYWORDS_KEYS),
            price_cell(record, PRICE_KEYS),
        )
    }
}

/// A loaded catalog. Read-only for the lifetime of a search.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    skipped: usize,
}

impl Catalog {
    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records = match serde_json::from_str::<Value>(raw)? {
            Value::Array(records) => records,
            other => {
                return Err(CatalogError::NotAnArray {
                    found: json_kind(&other),
                });
            }
        };

        let mut items = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for (idx, record) in records.iter().enumerate() {
            match record {
                Value::Object(fields) => items.push(CatalogItem::from_record(fields)),
                other => {
                    tracing::warn!(
                        "Skipping catalog record {}: expected an object, found {}",
                        idx,
                        json_kind(other)
                    );
                    skipped += 1;
                }
            }
        }

        if items.is_empty() && skipped > 0 {
            return Err(CatalogError::InvalidRecord { count: skipped });
        }

        Ok(Self { items, skipped })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let start = Instant::now();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_json_str(&raw)?;

    tracing::info!(
        "Loaded catalog with {} items ({} skipped) from {} in {:?}",
        catalog.len(),
        catalog.skipped(),
        path.display(),
        start.elapsed()
    );

    Ok(catalog)
}

fn lookup<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

/// Stringify a cell. Missing and `null` cells become empty strings.
fn text_cell(record: &Map<String, Value>, keys: &[&str]) -> String {
    match lookup(record, keys) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn price_cell(record: &Map<String, Value>, keys: &[&str]) -> Price {
    match lookup(record, keys) {
        None | Some(Value::Null) => Price::default(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map_or_else(|| Price::Text(n.to_string()), Price::Number),
        Some(Value::String(s)) => Price::Text(s.clone()),
        Some(other) => Price::Text(other.to_string()),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
