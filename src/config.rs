//! Runtime configuration resolved from CLI arguments and the environment

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

use crate::cli::Cli;
use crate::render::LINE_WIDTH;

/// File name of the cache database in the platform data directory
const DEFAULT_DB_FILE: &str = "urban_dict.db";

/// Errors that can occur while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No database path was given and no data directory could be determined
    #[error("No database path given: set DB_PATH or pass --db")]
    NoDataDir,
}

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the SQLite cache database
    pub db_path: PathBuf,
    /// Base URL of the define endpoint
    pub api_url: String,
    /// Column width definitions are wrapped to
    pub line_width: usize,
}

/// Default database location, `~/.local/share/urban-dict/urban_dict.db` on Linux
pub fn default_db_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "urban-dict")?;
    Some(project_dirs.data_dir().join(DEFAULT_DB_FILE))
}

impl Config {
    /// Builds the configuration from parsed CLI arguments
    ///
    /// The database path comes from `--db`, then `DB_PATH`, then the
    /// platform data directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => default_db_path().ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Config {
            db_path,
            api_url: cli.api_url.clone(),
            line_width: LINE_WIDTH,
        })
    }
}
