//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Video Sweep - find, classify, rename, and move video files
#[derive(Parser, Debug)]
#[command(name = "video-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan for videos
    #[arg(long, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory for series
    #[arg(long, value_name = "SERIES_OUTPUT")]
    pub series_output: PathBuf,

    /// Output directory for movies
    #[arg(long, value_name = "MOVIE_OUTPUT")]
    pub movie_output: PathBuf,

    /// Only print actions without moving files
    #[arg(long)]
    pub dry_run: bool,

    /// Move non-video files to a Deleted folder under the source
    #[arg(long)]
    pub clean_up: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
