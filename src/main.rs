//! Video Sweep CLI
//!
//! A command-line tool that classifies video files as movies or TV
//! episodes, derives canonical names, and moves them into place.

use clap::Parser;
use video_sweep::cli::{args::Cli, commands::sweep};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    sweep::run(&cli).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("video_sweep=debug")
    } else {
        EnvFilter::new("video_sweep=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
