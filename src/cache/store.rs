//! SQLite-backed definition store
//!
//! Provides the `DefinitionStore` repository trait and a `SqliteStore`
//! implementation over the `dict` table.

use std::path::{Path, PathBuf};

use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection};
use thiserror::Error;
use tracing::debug;

use crate::data::Definition;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS dict (
    definition TEXT NOT NULL,
    word TEXT NOT NULL,
    author TEXT NOT NULL,
    written_on TEXT NOT NULL,
    thumbs_up INTEGER NOT NULL
)";

/// Errors that can occur when accessing the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The database file does not exist
    #[error("The specified database doesn't exist: {}", .0.display())]
    DatabaseMissing(PathBuf),

    /// SQLite query failed
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// No rows stored for the word
    #[error("\"{0}\" does not exist in the database")]
    NotFound(String),
}

/// Repository over cached definitions
///
/// Every operation case-folds its `word` argument before matching.
pub trait DefinitionStore {
    /// Returns true if at least one definition is stored for `word`
    fn exists(&self, word: &str) -> Result<bool, CacheError>;

    /// Returns every definition stored for `word` in insertion order
    ///
    /// Returns an empty list for a word that is not cached.
    fn fetch(&self, word: &str) -> Result<Vec<Definition>, CacheError>;

    /// Stores the given definitions verbatim
    fn insert(&mut self, definitions: &[Definition]) -> Result<(), CacheError>;

    /// Removes every definition stored for `word`
    ///
    /// # Returns
    /// * `Ok(n)` - Number of rows removed (always at least 1)
    /// * `Err(CacheError::NotFound)` - If nothing is stored for the word
    fn delete(&mut self, word: &str) -> Result<usize, CacheError>;
}

/// Definition store backed by a SQLite database
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the cache database at `path`
    ///
    /// The file must already exist; it is never created here. The `dict`
    /// table is created if the database doesn't have one yet.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        if !path.exists() {
            return Err(CacheError::DatabaseMissing(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened cache database");
        Self::with_connection(conn)
    }

    /// Opens a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        // Stored words fold through the same function as lookup keys
        conn.create_scalar_function(
            "fold_key",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|word| fold_key(&word))),
        )?;
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self { conn })
    }
}

/// Case-folds a lookup key
///
/// Used for query normalization and, through the `fold_key` SQL function,
/// for stored words.
pub fn fold_key(word: &str) -> String {
    word.to_lowercase()
}

impl DefinitionStore for SqliteStore {
    fn exists(&self, word: &str) -> Result<bool, CacheError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM dict WHERE fold_key(word) = ?1 LIMIT 1")?;
        Ok(stmt.exists(params![fold_key(word)])?)
    }

    fn fetch(&self, word: &str) -> Result<Vec<Definition>, CacheError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT definition, word, author, written_on, thumbs_up
             FROM dict WHERE fold_key(word) = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![fold_key(word)], |row| {
            Ok(Definition {
                definition: row.get(0)?,
                word: row.get(1)?,
                author: row.get(2)?,
                written_on: row.get(3)?,
                thumbs_up: row.get(4)?,
            })
        })?;

        let definitions = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(definitions)
    }

    fn insert(&mut self, definitions: &[Definition]) -> Result<(), CacheError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO dict (definition, word, author, written_on, thumbs_up)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for def in definitions {
                stmt.execute(params![
                    def.definition,
                    def.word,
                    def.author,
                    def.written_on,
                    def.thumbs_up
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = definitions.len(), "cached definitions");
        Ok(())
    }

    fn delete(&mut self, word: &str) -> Result<usize, CacheError> {
        let key = fold_key(word);
        let removed = self
            .conn
            .execute("DELETE FROM dict WHERE fold_key(word) = ?1", params![key])?;
        if removed == 0 {
            return Err(CacheError::NotFound(key));
        }
        debug!(word = %key, rows = removed, "deleted cached definitions");
        Ok(removed)
    }
}
