//! Urban Dictionary API client
//!
//! Fetches definitions for a term from the Urban Dictionary `define` endpoint
//! and normalizes them for display and caching.

use reqwest::{Client, Request};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{Definition, DefinitionSource};

/// Base URL for the Urban Dictionary define endpoint
pub const URBAN_DICTIONARY_BASE_URL: &str = "https://api.urbandictionary.com/v0/define";

/// Errors that can occur when fetching definitions
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The service returned an empty definition list
    #[error("No results found for \"{0}\"")]
    NoResults(String),
}

/// Response envelope from the define endpoint
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(alias = "List", default)]
    list: Vec<Definition>,
}

/// Client for fetching definitions from the Urban Dictionary API
#[derive(Debug, Clone)]
pub struct UrbanClient {
    client: Client,
    base_url: String,
}

impl Default for UrbanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UrbanClient {
    /// Create a new UrbanClient pointing at the public API
    pub fn new() -> Self {
        Self::with_base_url(URBAN_DICTIONARY_BASE_URL)
    }

    /// Create a new UrbanClient pointing at a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds the GET request for a term, with the term form-encoded into the
    /// `term` query parameter
    fn build_request(&self, term: &str) -> Result<Request, FetchError> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("term", term)])
            .build()?;
        Ok(request)
    }
}

impl DefinitionSource for UrbanClient {
    /// Fetch all definitions for the given term
    ///
    /// # Returns
    /// * `Ok(Vec<Definition>)` - Definitions in the order the API ranked them
    /// * `Err(FetchError)` - If the request fails, the body is not valid JSON,
    ///   or the API has no definitions for the term
    async fn lookup(&self, term: &str) -> Result<Vec<Definition>, FetchError> {
        let request = self.build_request(term)?;
        debug!(url = %request.url(), "requesting definitions");

        let response = self.client.execute(request).await?.error_for_status()?;
        let text = response.text().await?;

        parse_response(term, &text)
    }
}

/// Parses a define endpoint body into normalized definitions
///
/// An empty list becomes [`FetchError::NoResults`].
pub fn parse_response(term: &str, body: &str) -> Result<Vec<Definition>, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    if response.list.is_empty() {
        return Err(FetchError::NoResults(term.to_string()));
    }

    Ok(response
        .list
        .into_iter()
        .map(|mut def| {
            def.written_on = normalize_written_on(&def.written_on);
            def
        })
        .collect())
}

/// Turns an API timestamp like `2020-01-01T10:00:00.000Z` into the display
/// form `2020-01-01 10:00:00.000`
///
/// Text substitution only: the first `T` becomes a space and a trailing `Z`
/// is dropped. Values that don't look like that pass through unchanged.
pub fn normalize_written_on(raw: &str) -> String {
    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    trimmed.replacen('T', " ", 1)
}
