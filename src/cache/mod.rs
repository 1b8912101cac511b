//! Cache module for storing fetched definitions locally
//!
//! Definitions are kept in a single SQLite table keyed by word. Lookups are
//! case-insensitive and a word is only fetched from the remote service when
//! it has no rows here.

mod store;

pub use store::{fold_key, CacheError, DefinitionStore, SqliteStore};
