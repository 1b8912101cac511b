//! Lookup pipeline tying the cache and the remote source together
//!
//! A lookup checks the cache first and only falls back to the remote source
//! on a miss, caching whatever it fetched.

use tracing::debug;

use crate::cache::DefinitionStore;
use crate::data::{Definition, DefinitionSource};
use crate::error::AppError;

/// Cache-first dictionary over a store and a remote source
#[derive(Debug)]
pub struct Dictionary<S, F> {
    store: S,
    source: F,
}

impl<S: DefinitionStore, F: DefinitionSource> Dictionary<S, F> {
    /// Creates a dictionary from a cache store and a remote source
    pub fn new(store: S, source: F) -> Self {
        Self { store, source }
    }

    /// Looks up definitions for an already-normalized query
    ///
    /// # Returns
    /// * `Ok(Vec<Definition>)` - Cached definitions, or freshly fetched ones
    ///   which are cached before returning
    /// * `Err(AppError)` - If the cache or the remote source fails, or the
    ///   source has no definitions for the query
    pub async fn lookup(&mut self, query: &str) -> Result<Vec<Definition>, AppError> {
        if self.store.exists(query)? {
            debug!(query, "cache hit");
            return Ok(self.store.fetch(query)?);
        }

        debug!(query, "cache miss, fetching");
        let definitions = self.source.lookup(query).await?;
        self.store.insert(&definitions)?;
        Ok(definitions)
    }

    /// Deletes every cached definition for the query
    ///
    /// Returns the number of rows removed.
    pub fn delete(&mut self, query: &str) -> Result<usize, AppError> {
        Ok(self.store.delete(query)?)
    }

    #[cfg(test)]
    fn into_store(self) -> S {
        self.store
    }
}
