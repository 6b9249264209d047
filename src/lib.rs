pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod search;
pub mod tracing;

pub use catalog::{Catalog, CatalogItem, Price, load_catalog};
pub use config::Config;
pub use error::{CatalogError, ConfigError, Result};
pub use format::{format_price, format_price_with};
pub use search::{MatchReason, MatchTrace, ScoredResult, SearchOptions, search, search_with};
