//! OMDb API client.
//!
//! Implements the [`ExternalLookup`] capability over the OMDb search
//! endpoint. The HTTP client carries a bounded timeout so an unreachable
//! endpoint degrades into a soft `Unverifiable` outcome upstream instead
//! of stalling the run.

use crate::core::reconciler::{ExternalLookup, LookupMatch};
use crate::Result;
use serde::Deserialize;
use std::time::Duration;

const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Request timeout for OMDb calls.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// OMDb client configuration.
#[derive(Debug, Clone)]
pub struct OmdbClientConfig {
    /// API key.
    pub api_key: String,
}

/// OMDb API client.
pub struct OmdbClient {
    config: OmdbClientConfig,
    client: reqwest::Client,
}

/// Search endpoint response envelope.
///
/// OMDb signals both "no match" and errors with `"Response": "False"`,
/// in which case `Search` is absent.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
}

/// A single search result.
#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
}

/// Parse the leading 4 digits of an OMDb year field.
///
/// Series entries carry ranges like `"2019-2021"` (or with an en dash);
/// only the first year matters for reconciliation.
fn parse_year(raw: &str) -> Option<u16> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

impl SearchResponse {
    fn into_matches(self) -> Vec<LookupMatch> {
        if self.response != "True" {
            return Vec::new();
        }
        self.search
            .into_iter()
            .map(|item| LookupMatch {
                title: item.title,
                year: parse_year(&item.year),
            })
            .collect()
    }
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    /// Build the search URL for a title and optional year.
    fn build_url(&self, title: &str, year: Option<u16>) -> String {
        let year_param = year.map(|y| format!("&y={}", y)).unwrap_or_default();
        format!(
            "{}?apikey={}&type=movie&s={}{}",
            OMDB_BASE_URL,
            self.config.api_key,
            urlencoding::encode(title),
            year_param
        )
    }
}

impl ExternalLookup for OmdbClient {
    async fn lookup(&self, title: &str, year: Option<u16>) -> Result<Vec<LookupMatch>> {
        let url = self.build_url(title, year);
        tracing::debug!("OMDb search: {} ({:?})", title, year);

        let resp: SearchResponse = self.client.get(&url).send().await?.json().await?;
        Ok(resp.into_matches())
    }
}
