//! Metadata reconciler module.
//!
//! Compares a locally-guessed movie title/year against an external
//! title/year lookup. Every failure mode of the lookup (unreachable,
//! empty, ambiguous) funnels into [`ValidationOutcome::Unverifiable`];
//! reconciliation never aborts a run and never retries.

use crate::models::classification::{UnverifiedReason, ValidationOutcome};
use crate::Result;

/// A single candidate returned by an external lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMatch {
    pub title: String,
    pub year: Option<u16>,
}

/// Read-only external title/year lookup capability.
///
/// Implemented by the OMDb client; tests supply in-memory fakes. The
/// lookup may fail or time out; callers treat any error as a soft
/// `Unverifiable` outcome.
pub trait ExternalLookup {
    fn lookup(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> impl std::future::Future<Output = Result<Vec<LookupMatch>>> + Send;
}

/// Normalize a title for comparison.
fn normalize_title(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Reconcile a movie guess against the external lookup.
///
/// - lookup failure or timeout: `Unverifiable(NetworkError)`
/// - no candidates: `Unverifiable(NotFound)`
/// - multiple candidates: `Unverifiable(Ambiguous)`, keeping the local
///   guess rather than arbitrarily picking one
/// - exactly one candidate matching title and year: `Confirmed`
/// - exactly one candidate differing: `Corrected` with the candidate's
///   title and year (falling back to the local year when the candidate
///   carries none)
pub async fn reconcile(
    title: &str,
    year: Option<u16>,
    lookup: &impl ExternalLookup,
) -> ValidationOutcome {
    let candidates = match lookup.lookup(title, year).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("Lookup failed for '{}': {}", title, e);
            return ValidationOutcome::Unverifiable {
                reason: UnverifiedReason::NetworkError,
            };
        }
    };

    match candidates.as_slice() {
        [] => ValidationOutcome::Unverifiable {
            reason: UnverifiedReason::NotFound,
        },
        [candidate] => {
            let titles_match = normalize_title(&candidate.title) == normalize_title(title);
            if titles_match && candidate.year == year {
                ValidationOutcome::Confirmed
            } else {
                ValidationOutcome::Corrected {
                    title: candidate.title.clone(),
                    year: candidate.year.or(year),
                }
            }
        }
        _ => ValidationOutcome::Unverifiable {
            reason: UnverifiedReason::Ambiguous,
        },
    }
}
