//! Name formatter module.
//!
//! Derives the canonical destination for a [`Classification`]:
//!
//! - movies land directly under the movie root as `Title [Year].ext`
//!   (the bracketed year is omitted when unknown);
//! - episodes land under `series_root/Show/Season N/` as
//!   `Show S01E01.ext`;
//! - `Unclassified` yields no target, which the planner turns into a skip.
//!
//! Formatting is pure and deterministic: the same classification always
//! yields the same target, and no filesystem access happens here. Two
//! distinct source files that classify identically format to the same
//! target; destination uniqueness is the executor's collision policy,
//! not a guarantee of this module.

use crate::models::classification::Classification;
use std::path::{Path, PathBuf};

/// A formatted destination: directory plus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Destination directory.
    pub directory: PathBuf,
    /// Destination file name including extension.
    pub filename: String,
}

impl Target {
    /// Full destination path.
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Replace path-hostile characters so titles are safe as file names.
fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

/// Format the canonical destination for a classification.
///
/// Returns `None` for `Unclassified`.
pub fn format_target(
    classification: &Classification,
    extension: &str,
    movie_root: &Path,
    series_root: &Path,
) -> Option<Target> {
    match classification {
        Classification::Movie { title, year } => {
            let title = sanitize_filename(title);
            let filename = match year {
                Some(year) => format!("{} [{}].{}", title, year, extension),
                None => format!("{}.{}", title, extension),
            };
            Some(Target {
                directory: movie_root.to_path_buf(),
                filename,
            })
        }
        Classification::Series {
            show_name,
            season,
            episode,
        } => {
            let show = sanitize_filename(show_name);
            // Season folder is unpadded; the episode token is zero-padded.
            let directory = series_root.join(&show).join(format!("Season {}", season));
            let filename = format!("{} S{:02}E{:02}.{}", show, season, episode, extension);
            Some(Target {
                directory,
                filename,
            })
        }
        Classification::Unclassified { .. } => None,
    }
}
