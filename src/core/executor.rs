//! Plan executor module.
//!
//! Applies the actions produced by the planner: creating destination
//! directories, moving video files, and relocating cleanup files. With
//! `dry_run` set, nothing on disk is touched; each action is only logged.
//!
//! An existing file at a destination is never overwritten; the action is
//! counted as failed and the batch continues. Per-action failures never
//! abort the remaining actions.

use crate::models::action::Action;
use crate::utils::fs::move_file;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Counts of what the executor did (or, in dry-run, would do).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteSummary {
    pub moved: usize,
    pub skipped: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Execute a batch of actions.
pub fn execute(actions: &[Action], dry_run: bool) -> ExecuteSummary {
    let mut summary = ExecuteSummary::default();

    let pb = if dry_run || actions.is_empty() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(actions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb
    };

    for action in actions {
        pb.inc(1);
        match action {
            Action::Move {
                source,
                destination,
                ..
            } => {
                pb.set_message(display_name(destination));
                if dry_run {
                    println!(
                        "Would move: {} -> {}",
                        source.display(),
                        destination.display()
                    );
                    summary.moved += 1;
                } else {
                    match apply_move(source, destination) {
                        Ok(()) => {
                            tracing::info!("Moved: {} -> {}", source.display(), destination.display());
                            summary.moved += 1;
                        }
                        Err(e) => {
                            eprintln!(
                                "{} {}: {}",
                                "Failed to move".red(),
                                source.display(),
                                e
                            );
                            summary.failed += 1;
                        }
                    }
                }
            }
            Action::Skip { source, reason } => {
                tracing::debug!("Skipped {} ({})", source.display(), reason);
                summary.skipped += 1;
            }
            Action::Delete {
                source,
                destination,
            } => {
                pb.set_message(display_name(destination));
                if dry_run {
                    println!(
                        "Would move (delete): {} -> {}",
                        source.display(),
                        destination.display()
                    );
                    summary.deleted += 1;
                } else {
                    match apply_move(source, destination) {
                        Ok(()) => {
                            tracing::info!(
                                "Moved (deleted): {} -> {}",
                                source.display(),
                                destination.display()
                            );
                            summary.deleted += 1;
                        }
                        Err(e) => {
                            eprintln!(
                                "{} {}: {}",
                                "Failed to move (delete)".red(),
                                source.display(),
                                e
                            );
                            summary.failed += 1;
                        }
                    }
                }
            }
        }
    }

    pb.finish_and_clear();
    summary
}

/// Create the destination directory and move one file, refusing to
/// overwrite an existing destination.
fn apply_move(source: &Path, destination: &Path) -> crate::Result<()> {
    if destination.exists() {
        return Err(crate::Error::FileAlreadyExists(
            destination.display().to_string(),
        ));
    }
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }
    move_file(source, destination)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classification::Classification;
    use std::fs;
    use std::path::PathBuf;

    fn move_action(source: PathBuf, destination: PathBuf) -> Action {
        Action::Move {
            source,
            destination,
            classification: Classification::Movie {
                title: "Alien".to_string(),
                year: Some(1979),
            },
            validation: None,
        }
    }

    #[test]
    fn test_execute_moves_file_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Alien [1979].mp4");
        fs::write(&source, b"x").unwrap();
        let destination = dir.path().join("movies/Alien [1979].mp4");

        let summary = execute(&[move_action(source.clone(), destination.clone())], false);
        assert_eq!(summary.moved, 1);
        assert_eq!(summary.failed, 0);
        assert!(!source.exists());
        assert!(destination.exists());
    }

    #[test]
    fn test_dry_run_mutates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Alien [1979].mp4");
        fs::write(&source, b"x").unwrap();
        let destination = dir.path().join("movies/Alien [1979].mp4");

        let summary = execute(&[move_action(source.clone(), destination.clone())], true);
        assert_eq!(summary.moved, 1);
        assert!(source.exists());
        assert!(!destination.exists());
    }

    #[test]
    fn test_never_overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Alien [1979].mp4");
        fs::write(&source, b"new").unwrap();
        let destination = dir.path().join("Alien [1979] copy.mp4");
        fs::write(&destination, b"old").unwrap();

        let summary = execute(&[move_action(source.clone(), destination.clone())], false);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.moved, 0);
        assert!(source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"old");
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.mp4");
        let ok_source = dir.path().join("Show S01E01.mkv");
        fs::write(&ok_source, b"x").unwrap();
        let ok_dest = dir.path().join("series/Show S01E01.mkv");

        let actions = vec![
            move_action(missing, dir.path().join("movies/gone.mp4")),
            move_action(ok_source, ok_dest.clone()),
        ];
        let summary = execute(&actions, false);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.moved, 1);
        assert!(ok_dest.exists());
    }

    #[test]
    fn test_delete_action_relocates_into_cleanup_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("readme.txt");
        fs::write(&source, b"x").unwrap();
        let destination = dir.path().join("Deleted/readme.txt");

        let summary = execute(
            &[Action::Delete {
                source: source.clone(),
                destination: destination.clone(),
            }],
            false,
        );
        assert_eq!(summary.deleted, 1);
        assert!(destination.exists());
        assert!(!source.exists());
    }
}
