//! Planned filesystem operations.

use super::classification::{Classification, ValidationOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A planned filesystem operation, not yet executed.
///
/// Exactly one `Action` is produced per gated input file. Actions are
/// immutable once built and consumed exactly once by the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Action {
    /// Move the file to its canonical destination.
    Move {
        source: PathBuf,
        destination: PathBuf,
        classification: Classification,
        #[serde(skip_serializing_if = "Option::is_none")]
        validation: Option<ValidationOutcome>,
    },
    /// Leave the file where it is.
    Skip { source: PathBuf, reason: String },
    /// Relocate a non-video file into the cleanup folder.
    Delete { source: PathBuf, destination: PathBuf },
}

impl Action {
    /// Source path of the action, whatever its kind.
    pub fn source(&self) -> &PathBuf {
        match self {
            Action::Move { source, .. } => source,
            Action::Skip { source, .. } => source,
            Action::Delete { source, .. } => source,
        }
    }
}
