//! Sweep command implementation.
//!
//! Coordinates the full pipeline: scan the source directory, build one
//! action per file, print the plan tables, and hand the actions to the
//! executor (which honors `--dry-run`).

use crate::cli::args::Cli;
use crate::cli::report;
use crate::core::executor;
use crate::core::planner::{Planner, PlannerConfig};
use crate::core::scanner;
use crate::models::config::discover_api_key;
use crate::services::omdb::{OmdbClient, OmdbClientConfig};
use crate::utils::fs::ensure_directory;
use crate::Result;
use colored::Colorize;

/// Run the sweep.
pub async fn run(cli: &Cli) -> Result<()> {
    // Source and root problems are configuration errors, surfaced once
    // before any file is processed. The output roots need not exist yet
    // (the executor creates them), but an existing non-directory is fatal.
    for root in [&cli.movie_output, &cli.series_output] {
        if root.exists() {
            ensure_directory(root)?;
        }
    }
    let scan = scanner::scan_directory(&cli.source)?;

    let config = PlannerConfig {
        movie_root: cli.movie_output.clone(),
        series_root: cli.series_output.clone(),
        source_root: cli.source.clone(),
        clean_up: cli.clean_up,
    };

    let planner: Planner<OmdbClient> = match discover_api_key() {
        Some(api_key) => {
            tracing::debug!("OMDb API key configured, movie reconciliation enabled");
            Planner::new(config).with_lookup(OmdbClient::new(OmdbClientConfig { api_key }))
        }
        None => {
            tracing::info!("No OMDb API key configured, movie titles will not be verified");
            Planner::new(config)
        }
    };

    let actions = planner.build_actions(&scan).await;
    report::print_actions(&actions);
    println!();

    let summary = executor::execute(&actions, cli.dry_run);

    let verb = if cli.dry_run { "Would move" } else { "Moved" };
    println!(
        "{} {} videos ({} skipped, {} cleaned up, {} failed)",
        verb.bold(),
        summary.moved,
        summary.skipped,
        summary.deleted,
        summary.failed
    );

    Ok(())
}
