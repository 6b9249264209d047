use anyhow::Context;
use catalog_search::{
    Config,
    cli::Cli,
    format::{format_catalog, render_search},
    load_catalog,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    catalog_search::tracing::init(cli.verbose);

    let cfg = Config::resolve(&cli)?;

    let catalog_path = cfg
        .catalog_path()
        .context("No catalog configured. Pass --catalog or set `catalog` in the config file")?;

    let catalog = load_catalog(&catalog_path)
        .inspect_err(|e| tracing::error!("Error loading catalog: {}", e))
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    if cli.dump {
        print!("{}", format_catalog(catalog.items()));
        println!();
    }

    let output = render_search(
        catalog.items(),
        &cli.query_string(),
        &cfg.display_options(),
        cli.json,
    )?;
    print!("{}", output);

    Ok(())
}
