//! GEDCOM parser and writer.
//!
//! This module provides [GedcomParserBuilder] to turn GEDCOM input into a
//! [GedcomDocument] and typed [RecordSet], and a writer that turns a node
//! forest back into GEDCOM lines.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses text, returns the [GedcomDocument]
//! * [`parse_file`] - parses a file, returns the extracted [RecordSet]
//!
//! # Full API
//! For more control, configure a [GedcomParserBuilder]:
//! * [`GedcomParserBuilder::for_file`] / [`GedcomParserBuilder::for_str`]
//! * [`GedcomParserBuilder::build`] - returns a [GedcomParser]
//! * [`GedcomParser::records`] - extracts the typed records
//!
//! # Format
//! A GEDCOM file is a sequence of lines:
//! * `line ::= level [xref] tag [value]`
//! * `level ::= non-negative integer`
//! * `xref ::= '@' identifier '@'`
//!
//! Furthermore:
//! * A line belongs to the closest preceding line with a smaller level
//! * Values extend to the end of the line; inner whitespace is kept
//! * Blank and malformed lines are skipped silently

pub mod defs;
mod parser;
pub mod writer;

pub use self::parser::{GedcomParser, GedcomParserBuilder, ReadStrategy};
pub use self::writer::{subtree_to_gedcom, to_gedcom, write_gedcom_file};

use crate::model::{GedcomDocument, build_document};
use crate::parser::ParsingError;
use crate::records::RecordSet;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses GEDCOM text into a [GedcomDocument].
///
/// Parsing text cannot fail: malformed lines are skipped.
///
/// # Example
/// ```
/// use gedwick::gedcom::parse_str;
///
/// let document = parse_str("0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n0 TRLR");
/// assert_eq!(document.forest().num_roots(), 3);
/// ```
pub fn parse_str<S: AsRef<str>>(gedcom: S) -> GedcomDocument {
    build_document(gedcom.as_ref().lines())
}

/// Parses a GEDCOM file with default settings and extracts its records.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// Returns a [ParsingError] if the file cannot be opened or read.
///
/// # Example
/// ```no_run
/// use gedwick::gedcom::parse_file;
///
/// let records = parse_file("family.ged")?;
/// println!("{} individuals, {} families", records.individuals.len(), records.families.len());
/// # Ok::<(), gedwick::parser::ParsingError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RecordSet, ParsingError> {
    Ok(GedcomParserBuilder::for_file(path).build()?.records())
}
