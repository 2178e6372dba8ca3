//! skill-catalog CLI: regenerate `<workspace>/skills/catalog.json`.
//!
//! Run with no arguments for the standard rebuild.
//!
//! Logging: set `RUST_LOG=skill_catalog=debug` to see scanner logs on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skill_catalog::{CatalogBuilder, CatalogConfig, catalog_entry_schema};

/// Scan skill sources and write the skill catalog.
#[derive(Parser, Debug)]
#[command(name = "skill-catalog", author, version, about, long_about = None)]
struct Cli {
    /// Workspace root (default: $SKILL_CATALOG_WORKSPACE or ~/.ai-workspace).
    #[arg(long, short = 'w', value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Config file (default: <workspace>/config.toml).
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Output file (default: <workspace>/skills/catalog.json).
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the catalog entry JSON schema and exit.
    #[arg(long, default_value_t = false)]
    schema: bool,

    /// Debug logging.
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "skill_catalog=debug"
        } else {
            "skill_catalog=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if cli.schema {
        println!("{}", catalog_entry_schema());
        return Ok(());
    }

    let workspace = cli
        .workspace
        .unwrap_or_else(CatalogConfig::default_workspace);
    let mut config = match &cli.config_file {
        Some(path) => CatalogConfig::load_from(&workspace, path),
        None => CatalogConfig::load(&workspace),
    }
    .context("Failed to load skill catalog config")?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    tracing::debug!(?config, "resolved catalog config");

    let count = CatalogBuilder::new(config.sources)
        .generate(&config.output)
        .with_context(|| format!("Failed to write catalog to {}", config.output.display()))?;

    println!(
        "Generated catalog with {count} skills at {}",
        config.output.display()
    );
    Ok(())
}
