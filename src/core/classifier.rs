//! Filename classifier module.
//!
//! Turns a bare filename (without directory or extension) into a typed
//! [`Classification`]: series episode, movie, or unclassified. Classification
//! failures are data, never errors: anything the patterns cannot make sense
//! of comes back as `Unclassified`.
//!
//! Series detection runs first and takes strict precedence over movie
//! detection; an `SxxExx` token is a more specific signal than a bracketed
//! number that merely resembles a year.

use crate::models::classification::Classification;
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

/// Season numbers above this are treated as misparses.
const MAX_SEASON: u32 = 99;
/// Episode numbers above this are treated as misparses.
const MAX_EPISODE: u32 = 999;
/// Earliest plausible release year.
const MIN_YEAR: u16 = 1900;

// SxxExx token: any digit count, case-insensitive.
static RE_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[Ss](\d+)[Ee](\d+)").unwrap());

// A 4-digit year enclosed in parentheses or brackets.
static RE_YEAR_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[](\d{4})[)\]]").unwrap());

// A hyphen-delimited tag: " - Something".
static RE_HYPHEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s-\s").unwrap());

/// Latest plausible release year (next year's releases leak early).
fn max_year() -> u16 {
    chrono::Utc::now().year() as u16 + 1
}

/// Normalize a title or show name extracted from a filename prefix.
///
/// Dots and underscores act as word separators in release names; runs of
/// whitespace collapse to a single space and trailing separators are cut.
/// Case is preserved as found.
fn clean_name(raw: &str) -> String {
    let spaced = raw.replace(['.', '_'], " ");
    let trimmed = spaced.trim().trim_end_matches(['-', ' ']);
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut the show-name prefix at the first structural token: a bracketed
/// release year, a hyphen-delimited tag, or the series token itself.
fn structural_prefix(stem: &str, series_token_start: usize) -> &str {
    let mut cut = series_token_start;
    if let Some(m) = RE_YEAR_MARKER.find(stem) {
        if m.start() < cut {
            cut = m.start();
        }
    }
    if let Some(m) = RE_HYPHEN_TAG.find(stem) {
        if m.start() < cut {
            cut = m.start();
        }
    }
    &stem[..cut]
}

/// Classify a filename stem as a series episode, if it carries an SxxExx token.
fn try_classify_series(stem: &str) -> Option<Classification> {
    let caps = RE_SERIES.captures(stem)?;
    let token = caps.get(0)?;

    // Oversized digit runs fail the integer parse.
    let season: u32 = caps[1].parse().ok()?;
    let episode: u32 = caps[2].parse().ok()?;
    if season > MAX_SEASON || episode > MAX_EPISODE {
        return None;
    }

    let show_name = clean_name(structural_prefix(stem, token.start()));
    if show_name.is_empty() {
        return None;
    }

    Some(Classification::Series {
        show_name,
        season,
        episode,
    })
}

/// Classify a filename stem as a movie, if it carries an in-range year marker.
fn try_classify_movie(stem: &str) -> Option<Classification> {
    let upper = max_year();
    for caps in RE_YEAR_MARKER.captures_iter(stem) {
        let year: u16 = match caps[1].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        if !(MIN_YEAR..=upper).contains(&year) {
            continue;
        }

        let marker = caps.get(0)?;
        let title = clean_name(&stem[..marker.start()]);
        if title.is_empty() {
            return None;
        }
        return Some(Classification::Movie {
            title,
            year: Some(year),
        });
    }
    None
}

/// Classify a filename (without directory or extension).
///
/// Never panics and never errors; input the patterns cannot interpret
/// yields `Unclassified` carrying the raw name.
pub fn classify(stem: &str) -> Classification {
    if stem.trim().is_empty() {
        return Classification::Unclassified {
            raw_name: stem.to_string(),
        };
    }

    // A series token, even one that fails its bounds checks, pins the
    // file as a (possibly unparseable) episode; it never degrades into
    // movie detection.
    if RE_SERIES.is_match(stem) {
        return try_classify_series(stem).unwrap_or_else(|| Classification::Unclassified {
            raw_name: stem.to_string(),
        });
    }
    if let Some(movie) = try_classify_movie(stem) {
        return movie;
    }

    Classification::Unclassified {
        raw_name: stem.to_string(),
    }
}
