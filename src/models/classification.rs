//! Classification and validation data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed result of interpreting a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Classification {
    /// A television episode.
    Series {
        show_name: String,
        season: u32,
        episode: u32,
    },
    /// A movie, with an optional release year.
    Movie { title: String, year: Option<u16> },
    /// Neither pattern matched; carries the raw name for reporting.
    Unclassified { raw_name: String },
}

impl Classification {
    /// Short label for table display.
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Series { .. } => "series",
            Classification::Movie { .. } => "movie",
            Classification::Unclassified { .. } => "unclassified",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Series {
                show_name,
                season,
                episode,
            } => write!(f, "{} S{:02}E{:02}", show_name, season, episode),
            Classification::Movie {
                title,
                year: Some(year),
            } => write!(f, "{} [{}]", title, year),
            Classification::Movie { title, year: None } => write!(f, "{}", title),
            Classification::Unclassified { raw_name } => write!(f, "? {}", raw_name),
        }
    }
}

/// Why a movie could not be verified against the external lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnverifiedReason {
    /// No API key configured.
    MissingCredential,
    /// The lookup request failed or timed out.
    NetworkError,
    /// The lookup returned no candidates.
    NotFound,
    /// The lookup returned multiple candidates; the local guess is kept.
    Ambiguous,
}

impl fmt::Display for UnverifiedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnverifiedReason::MissingCredential => "no credential",
            UnverifiedReason::NetworkError => "network error",
            UnverifiedReason::NotFound => "not found",
            UnverifiedReason::Ambiguous => "ambiguous",
        };
        f.write_str(s)
    }
}

/// Outcome of reconciling a movie guess against the external lookup.
///
/// Attached only to `Classification::Movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// The lookup agrees with the local guess.
    Confirmed,
    /// The lookup supplied an authoritative title/year differing from the guess.
    Corrected { title: String, year: Option<u16> },
    /// The guess could not be checked; it is kept as-is.
    Unverifiable { reason: UnverifiedReason },
}
