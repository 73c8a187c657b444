//! Export of extracted records to other formats.
//!
//! Currently JSON only, see [json].

pub mod json;

pub use json::{ExportOptions, to_json_string, write_json, write_json_file};

use std::io;
use thiserror::Error;

/// Error raised while exporting records.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the output failed.
    #[error("IO error - {0}")]
    Io(#[from] io::Error),

    /// Serializing the records failed.
    #[error("JSON error - {0}")]
    Json(#[from] serde_json::Error),
}
