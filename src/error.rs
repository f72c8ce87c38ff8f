use std::path::{Path, PathBuf};

use thiserror::Error;

/// A single input file could not be turned into a `GenomicRecord`. The file is skipped and the
/// run continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unable to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GenBank data in {}: {message}", path.display())]
    Syntax { path: PathBuf, message: String },

    #[error("no records found in {}", path.display())]
    Empty { path: PathBuf },

    #[error("expected exactly one record in {}, found {count}", path.display())]
    MultipleRecords { path: PathBuf, count: usize },
}

impl ParseError {
    /// The file that failed to parse.
    pub fn path(&self) -> &Path {
        match self {
            ParseError::Io { path, .. }
            | ParseError::Syntax { path, .. }
            | ParseError::Empty { path }
            | ParseError::MultipleRecords { path, .. } => path,
        }
    }
}

/// The sequence of a single matched feature could not be derived. Only that hit is skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("feature location has no segments that can be extracted")]
    EmptyLocation,

    #[error("segment {start}..{end} lies outside the record sequence of length {len}")]
    OutOfBounds { start: i64, end: i64, len: usize },
}

/// The final output could not be written. This is the only fatal error of a run.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("unable to create a temporary output file in {}: {source}", dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write sequences to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to move finished output into place at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Search terms or run options that cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search terms must not be empty")]
    EmptyTerm,

    #[error("at least one gene name or keyword is required")]
    NoTerms,

    #[error("thread count must be at least 1")]
    NoThreads,
}
