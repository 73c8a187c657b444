//! Gedwick is a library to parse genealogical data from GEDCOM files.
//!
//! This crate reconstructs the tree structure of GEDCOM files and projects it
//! into typed records.
//! Core functionality provided:
//! - Tree building: Lines `<level> [@xref@] <tag> [value]` are tokenized and
//!   nested by level into a [Forest](crate::model::Forest) of nodes (arena pattern, nodes are
//!   referenced by index only), together with an index of declared
//!   cross-reference ids. See [crate::model].
//! - Records: Individuals, families, notes and sources are extracted from
//!   the declared records into maps keyed by id. See [crate::records].
//! - Pedigrees: Ancestors of an individual are resolved by following
//!   child-of-family links, with detection of cyclic ancestry.
//! - Writers: Forests can be written back as GEDCOM lines, records exported
//!   as JSON. See [crate::gedcom::writer] and [crate::export].
//!
//! Limitations:
//! - No validation against the GEDCOM standard
//! - Malformed lines are skipped silently (only counted)
//! - Only a fixed set of tags is interpreted (`INDI`, `FAM`, `NOTE`, `SOUR`,
//!   `NAME`, `SEX`, `BIRT`, `DEAT`, `MARR`, `FAMC`, `FAMS`, `HUSB`, `WIFE`,
//!   `CHIL`, `DATE`, `PLAC`, `CONT`, `CONC`)
//!
//! # Usage patterns
//! 1. Quick functions with default settings:
//!    [parse_gedcom_str] and [parse_gedcom_file].
//! 2. A configured parser using
//!    [GedcomParserBuilder](crate::gedcom::GedcomParserBuilder) for control
//!    over read strategy and continuation style.
//!
//! ## Example Default Configuration
//!
//! ```
//! use gedwick::parse_gedcom_str;
//! use gedwick::records::RecordSet;
//!
//! let document = parse_gedcom_str("0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n");
//! let records = RecordSet::from_document(&document);
//!
//! let john = &records.individuals["I1"];
//! assert_eq!(john.name, "John /Doe/");
//! assert_eq!(john.sex, "M");
//! ```
//!
//! ## Example Parser Configuration
//!
//! ```no_run
//! use gedwick::gedcom::GedcomParserBuilder;
//! use gedwick::records::ContinuationStyle;
//!
//! let parser = GedcomParserBuilder::for_file("family.ged")
//!     .with_buffered_source()
//!     .with_continuation_style(ContinuationStyle::Gedcom)
//!     .build()?;
//!
//! println!("Skipped {} malformed lines", parser.num_skipped_lines());
//! let pedigree = parser.records().pedigree("I1")?;
//! for (depth, node) in pedigree.iter() {
//!     println!("{}{}", "  ".repeat(depth), node.id);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod export;
pub mod gedcom;
pub mod model;
pub mod parser;
pub mod records;

use crate::model::GedcomDocument;
use crate::parser::parsing_error::ParsingError;
use crate::records::RecordSet;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses GEDCOM text, returning the [GedcomDocument] with node forest and
/// cross-reference index.
///
/// See [`gedcom::parse_str`] for full documentation.
pub fn parse_gedcom_str<S: AsRef<str>>(gedcom: S) -> GedcomDocument {
    gedcom::parse_str(gedcom)
}

/// Parses a GEDCOM file using default settings,
/// returning the extracted [RecordSet].
///
/// See [`gedcom::parse_file`] for full documentation.
pub fn parse_gedcom_file<P: AsRef<Path>>(path: P) -> Result<RecordSet, ParsingError> {
    gedcom::parse_file(path)
}
