use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalog-search")]
#[command(about = "Rank catalog products against a free-text query", long_about = None)]
pub struct Cli {
    /// Search terms; joined with spaces
    pub query: Vec<String>,
    /// TOML config file
    #[arg(long, env = "CATALOG_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
    /// Catalog JSON file (overrides the config)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
    /// Currency symbol for prices (overrides the config)
    #[arg(long)]
    pub currency: Option<String>,
    /// Show relevance scores
    #[arg(short, long)]
    pub scores: bool,
    /// Show which scoring rules matched each result
    #[arg(short, long)]
    pub trace: bool,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
    /// Print the loaded catalog before searching
    #[arg(long)]
    pub dump: bool,
    /// Log per-item score details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}
