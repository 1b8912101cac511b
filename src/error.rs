//! Top-level error type for a run of the tool

use thiserror::Error;

use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::data::FetchError;

/// Any failure that ends the process
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
