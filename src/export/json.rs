//! JSON export of extracted records.
//!
//! The output has the shape
//! ```text
//! {"individuals":[{"id","name","sex","events":[{"type","date","place"}, ...]}, ...],
//!  "families":[{"id","husband","wife","children":[...]}, ...]}
//! ```
//! With [ExportOptions::include_citations], individuals and families also
//! carry `notes` and `sources` arrays with resolved text.

use crate::export::ExportError;
use crate::records::{Citation, Event, Family, Individual, RecordSet};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =#========================================================================#=
// EXPORT OPTIONS
// =#========================================================================#=
/// Options controlling the JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent the output for human readers
    pub pretty: bool,
    /// Add resolved `notes` and `sources` to each record
    pub include_citations: bool,
}

impl ExportOptions {
    /// Enables indented output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Enables `notes` and `sources` arrays on each record.
    pub fn with_citations(mut self) -> Self {
        self.include_citations = true;
        self
    }
}

// =#========================================================================#=
// SERIALIZED SHAPE
// =#========================================================================#=
#[derive(Serialize)]
struct ExportDocument<'a> {
    individuals: Vec<IndividualEntry<'a>>,
    families: Vec<FamilyEntry<'a>>,
}

#[derive(Serialize)]
struct IndividualEntry<'a> {
    id: &'a str,
    name: &'a str,
    sex: &'a str,
    events: &'a [Event],
    #[serde(flatten)]
    citations: Option<CitationEntries>,
}

#[derive(Serialize)]
struct FamilyEntry<'a> {
    id: &'a str,
    husband: &'a str,
    wife: &'a str,
    children: &'a [String],
    #[serde(flatten)]
    citations: Option<CitationEntries>,
}

#[derive(Serialize)]
struct CitationEntries {
    notes: Vec<String>,
    sources: Vec<String>,
}

impl CitationEntries {
    fn collect(records: &RecordSet, notes: &[Citation], sources: &[Citation]) -> Self {
        CitationEntries {
            notes: notes.iter().map(|c| records.resolve_note(c).to_string()).collect(),
            sources: sources.iter().map(|c| records.resolve_source(c).to_string()).collect(),
        }
    }
}

impl<'a> ExportDocument<'a> {
    fn new(records: &'a RecordSet, options: &ExportOptions) -> Self {
        let citations = |notes: &[Citation], sources: &[Citation]| {
            options
                .include_citations
                .then(|| CitationEntries::collect(records, notes, sources))
        };

        let individuals = records
            .individuals
            .values()
            .map(|individual: &'a Individual| IndividualEntry {
                id: &individual.id,
                name: &individual.name,
                sex: &individual.sex,
                events: &individual.events,
                citations: citations(&individual.notes, &individual.sources),
            })
            .collect();

        let families = records
            .families
            .values()
            .map(|family: &'a Family| FamilyEntry {
                id: &family.id,
                husband: &family.husband_id,
                wife: &family.wife_id,
                children: &family.children_ids,
                citations: citations(&family.notes, &family.sources),
            })
            .collect();

        ExportDocument { individuals, families }
    }
}

// ============================================================================
// EXPORT API (pub)
// ============================================================================
/// Returns the JSON representation of the records.
///
/// # Errors
/// Returns [ExportError::Json] if serialization fails.
///
/// # Example
/// ```
/// use gedwick::parse_gedcom_str;
/// use gedwick::export::{ExportOptions, to_json_string};
/// use gedwick::records::RecordSet;
///
/// let document = parse_gedcom_str("0 @F1@ FAM\n1 HUSB @I1@\n1 CHIL @I3@");
/// let records = RecordSet::from_document(&document);
/// let json = to_json_string(&records, &ExportOptions::default())?;
///
/// assert_eq!(
///     json,
///     r#"{"individuals":[],"families":[{"id":"F1","husband":"I1","wife":"","children":["I3"]}]}"#
/// );
/// # Ok::<(), gedwick::export::ExportError>(())
/// ```
pub fn to_json_string(records: &RecordSet, options: &ExportOptions) -> Result<String, ExportError> {
    let document = ExportDocument::new(records, options);
    let json = if options.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Writes the JSON representation of the records to `writer`.
///
/// # Errors
/// Returns an [ExportError] if serialization or writing fails.
pub fn write_json<W: Write>(writer: W, records: &RecordSet, options: &ExportOptions) -> Result<(), ExportError> {
    let document = ExportDocument::new(records, options);
    if options.pretty {
        serde_json::to_writer_pretty(writer, &document)?;
    } else {
        serde_json::to_writer(writer, &document)?;
    }
    Ok(())
}

/// Writes the JSON representation of the records to a file, followed by a newline.
///
/// # Errors
/// Returns an [ExportError] if the file cannot be created or written.
pub fn write_json_file<P: AsRef<Path>>(path: P, records: &RecordSet, options: &ExportOptions) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, records, options)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
