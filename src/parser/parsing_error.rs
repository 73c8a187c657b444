//! Error types for reading GEDCOM input.
//!
//! Malformed lines never produce an error, they are skipped by the tree
//! builder. The only failures left are those of the input source itself,
//! represented by [ParsingError].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Error raised when GEDCOM input cannot be read.
#[derive(Debug, Error)]
pub enum ParsingError {
    /// The input file could not be opened.
    #[error("Could not open {} - {source}", path.display())]
    Open {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading failed after `line` lines had been consumed successfully.
    #[error("IO error after line {line} - {source}")]
    Io {
        /// Number of lines read before the failure
        line: usize,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl ParsingError {
    /// Create an [ParsingError::Open] for the given path.
    pub fn open<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ParsingError::Open { path: path.into(), source }
    }

    /// Create an [ParsingError::Io] with the number of lines read so far.
    pub fn io(line: usize, source: io::Error) -> Self {
        ParsingError::Io { line, source }
    }

    /// Get the line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParsingError::Open { .. } => None,
            ParsingError::Io { line, .. } => Some(*line),
        }
    }
}
