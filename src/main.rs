//! get-papers - fetch PubMed papers with non-academic authors
//!
//! ## Usage
//! ```bash
//! get-papers "cancer therapy"
//! get-papers "cancer therapy" --file results.csv --debug
//! ```

use anyhow::Result;
use clap::Parser;
use pubmed_affiliations::{logging, pipeline, RunConfig};
use std::path::PathBuf;
use tracing::error;

/// Fetch research papers from PubMed.
#[derive(Parser)]
#[command(name = "get-papers")]
#[command(about, long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Output CSV filename
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig::new(cli.query, cli.file, cli.debug);
    logging::init(config.debug);

    let mut stdout = std::io::stdout();

    // Upstream and output failures are logged, never turned into an exit code.
    if let Err(e) = pipeline::run(&config, &mut stdout).await {
        error!(error = %e, "Run failed");
    }

    Ok(())
}
