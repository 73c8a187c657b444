//! Low-level parsing infrastructure for GEDCOM files.
//!
//! This module provides the line tokenizer, the sources feeding raw lines
//! into the tree builder, and the error type for unreadable input.

pub mod line_source;
pub mod line_tokenizer;
pub mod parsing_error;

pub use line_source::{BufferedLineSource, InMemoryLineSource, LineSource};
pub use line_tokenizer::{Level, TokenizedLine, tokenize_line};
pub use parsing_error::ParsingError;
