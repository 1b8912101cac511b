//! Urban Dict CLI Library
//!
//! This module exposes the lookup pipeline and its parts for use in
//! integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod render;
