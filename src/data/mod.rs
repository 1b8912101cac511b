//! Core data models for Urban Dict CLI
//!
//! This module contains the definition record shared by the remote client,
//! the cache store and the presenter.

pub mod urban;

pub use urban::{normalize_written_on, FetchError, UrbanClient};

use serde::{Deserialize, Serialize};

/// A single definition entry for a word
///
/// Several records may share the same `word`; they keep the order the remote
/// service returned them in and the first one is treated as primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The word being defined, as spelled by the remote service
    pub word: String,
    /// Free-form definition text, may contain embedded newlines
    pub definition: String,
    /// Author of the definition
    pub author: String,
    /// Display timestamp of when the definition was written
    pub written_on: String,
    /// Number of upvotes
    #[serde(default)]
    pub thumbs_up: i64,
}

/// A source of definitions for a lookup term
///
/// Implemented by [`UrbanClient`] for the real API; the lookup pipeline only
/// depends on this trait.
#[allow(async_fn_in_trait)]
pub trait DefinitionSource {
    /// Looks up all definitions for `term`
    ///
    /// An empty result is reported as [`FetchError::NoResults`], never as an
    /// empty `Ok`.
    async fn lookup(&self, term: &str) -> Result<Vec<Definition>, FetchError>;
}
