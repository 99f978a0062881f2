//! Plan builder module.
//!
//! Combines classifier, formatter, and reconciler output into one
//! [`Action`] per input file. The planner performs no filesystem mutation
//! and no network I/O beyond the reconciler's read-only lookup; the
//! resulting actions are handed to the executor.

use crate::core::classifier::classify;
use crate::core::formatter::format_target;
use crate::core::reconciler::{reconcile, ExternalLookup};
use crate::core::scanner::{ScanResult, DELETED_DIR_NAME};
use crate::models::action::Action;
use crate::models::classification::{Classification, UnverifiedReason, ValidationOutcome};
use std::path::PathBuf;

/// Planner configuration, fixed for the duration of a run.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Root directory for organized movies.
    pub movie_root: PathBuf,
    /// Root directory for organized series.
    pub series_root: PathBuf,
    /// Source directory; cleanup actions target `<source>/Deleted/`.
    pub source_root: PathBuf,
    /// Whether to plan relocation of non-video files.
    pub clean_up: bool,
}

/// Builds the per-file action plan.
pub struct Planner<L> {
    config: PlannerConfig,
    lookup: Option<L>,
}

impl<L: ExternalLookup> Planner<L> {
    /// Create a planner without an external lookup; movies are marked
    /// `Unverifiable(MissingCredential)`.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            lookup: None,
        }
    }

    /// Attach an external lookup used to reconcile movie guesses.
    pub fn with_lookup(mut self, lookup: L) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Build one action per input file, preserving scan order.
    ///
    /// Per-file problems never abort the batch: a file that cannot be
    /// classified becomes a `Skip`, a movie that cannot be verified keeps
    /// its local guess.
    pub async fn build_actions(&self, scan: &ScanResult) -> Vec<Action> {
        let mut actions = Vec::with_capacity(scan.videos.len() + scan.others.len());

        for video in &scan.videos {
            actions.push(self.plan_video(video).await);
        }

        if self.config.clean_up {
            let deleted_dir = self.config.source_root.join(DELETED_DIR_NAME);
            for other in &scan.others {
                let name = other
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                actions.push(Action::Delete {
                    source: other.clone(),
                    destination: deleted_dir.join(name),
                });
            }
        }

        actions
    }

    /// Classify, format, and (for movies) reconcile a single video file.
    async fn plan_video(&self, video: &crate::core::scanner::VideoFile) -> Action {
        let mut classification = classify(&video.stem);

        let target = match format_target(
            &classification,
            &video.extension,
            &self.config.movie_root,
            &self.config.series_root,
        ) {
            Some(target) => target,
            None => {
                tracing::debug!("Unclassified: {}", video.filename);
                return Action::Skip {
                    source: video.path.clone(),
                    reason: "unclassified".to_string(),
                };
            }
        };

        let mut destination = target.full_path();
        let mut validation = None;

        if let Classification::Movie { title, year } = &classification {
            let outcome = match &self.lookup {
                Some(lookup) => reconcile(title, *year, lookup).await,
                None => ValidationOutcome::Unverifiable {
                    reason: UnverifiedReason::MissingCredential,
                },
            };

            // A correction re-runs the formatter with the authoritative
            // title and year before the final destination is fixed.
            if let ValidationOutcome::Corrected { title, year } = &outcome {
                let corrected = Classification::Movie {
                    title: title.clone(),
                    year: *year,
                };
                if let Some(target) = format_target(
                    &corrected,
                    &video.extension,
                    &self.config.movie_root,
                    &self.config.series_root,
                ) {
                    destination = target.full_path();
                    classification = corrected;
                }
            }

            validation = Some(outcome);
        }

        Action::Move {
            source: video.path.clone(),
            destination,
            classification,
            validation,
        }
    }
}
