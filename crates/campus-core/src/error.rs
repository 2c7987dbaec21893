//! Startup errors. Anything here aborts the process; lookup misses are never errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv_async::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{line}: no value for required column '{column}'", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },

    #[error("invalid route pattern: {0}")]
    Pattern(#[from] regex::Error),
}
