//! Recipe catalog command-line entry point.
//!
//! # Responsibility
//! - Parse process configuration and initialize logging.
//! - Seed the catalog and serve the HTTP API.
//! - Offer offline checks for import files.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use recipe_api::ApiConfig;
use recipe_core::{read_import_file, write_export_file, CatalogStore, LoadReport};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "recipe-catalog", version, about = "In-memory recipe catalog service")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted).
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve {
        /// Address to bind to.
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: SocketAddr,

        /// Start with an empty catalog instead of the demo recipes.
        #[arg(long)]
        no_seed: bool,
    },
    /// Dry-run an import file and report which records would be skipped.
    CheckImport {
        /// JSON file holding an array of recipes.
        path: PathBuf,
    },
    /// Write the demo recipes to a JSON file in export format.
    ExportSeed {
        /// Destination file.
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(recipe_core::default_log_level());
    recipe_core::init_logging(level, cli.log_dir.as_deref())
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    match cli.command.unwrap_or(Command::Serve {
        bind: ApiConfig::default().bind_addr,
        no_seed: false,
    }) {
        Command::Serve { bind, no_seed } => serve(bind, no_seed).await,
        Command::CheckImport { path } => {
            let report = check_import(&path)?;
            println!(
                "{}: {} of {} records importable",
                path.display(),
                report.imported,
                report.total()
            );
            for skip in &report.skipped {
                println!("  record #{}: {}", skip.index, skip.reason);
            }
            Ok(())
        }
        Command::ExportSeed { output } => {
            let written = export_seed(&output)?;
            println!("wrote {written} recipes to {}", output.display());
            Ok(())
        }
    }
}

async fn serve(bind: SocketAddr, no_seed: bool) -> Result<()> {
    let store = if no_seed {
        CatalogStore::new()
    } else {
        CatalogStore::seeded()
    };
    log::info!(
        "event=catalog_ready module=cli status=ok seeded={} recipes={}",
        !no_seed,
        store.len()
    );

    recipe_api::run_server(ApiConfig::with_bind_addr(bind), store)
        .await
        .with_context(|| format!("server on {bind} stopped with an error"))
}

/// Loads `path` into a scratch catalog and reports what an import would keep.
fn check_import(path: &Path) -> Result<LoadReport> {
    let records = read_import_file(path)
        .with_context(|| format!("failed to decode import file {}", path.display()))?;

    let mut scratch = CatalogStore::new();
    Ok(scratch.import_bulk_report(records))
}

/// Writes the demo recipes in export format. Returns the number written.
fn export_seed(output: &Path) -> Result<usize> {
    let store = CatalogStore::seeded();
    write_export_file(output, &store.export_all())
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(store.len())
}
