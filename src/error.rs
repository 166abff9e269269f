//! Error types for the gridrange command-line tool

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the gridrange binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Grid(#[from] gridrange_core::GridError),
}

pub type Result<T> = std::result::Result<T, CliError>;
