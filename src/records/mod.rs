//! Typed genealogical records projected from a parsed document.
//!
//! The extraction pass reads a [GedcomDocument] and produces four maps,
//! bundled as a [RecordSet]:
//!
//! | Map | Built by | From records tagged |
//! |-----|----------|---------------------|
//! | individuals | [extract_entities] | `INDI` |
//! | families | [extract_entities] | `FAM` |
//! | notes | [resolve_citations] | `NOTE` |
//! | sources | [resolve_citations] | `SOUR` |
//!
//! All maps are keyed by declared id (without delimiters) and iterate in the
//! order ids were first declared. Records are joined only by id: a pointer
//! to an id that is missing from the target map is displayed as unresolved,
//! never treated as an error.
//!
//! Ancestor chains are followed on demand with [resolve_pedigree].

pub mod citation;
pub mod entity;
pub mod event;
pub mod pedigree;

pub use citation::{Citation, ContinuationStyle, NoteMap, ResolvedText, SourceMap, continued_text, resolve_citations};
pub use entity::{Family, FamilyMap, Individual, IndividualMap, extract_entities};
pub use event::{Event, extract_event};
pub use pedigree::{Pedigree, PedigreeError, PedigreeIndex, PedigreeIter, PedigreeNode, resolve_pedigree};

use crate::model::GedcomDocument;

// =#========================================================================#=
// RECORD SET
// =#========================================================================#=
/// All typed records extracted from one document.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// Individuals by id
    pub individuals: IndividualMap,
    /// Families by id
    pub families: FamilyMap,
    /// Resolved note texts by id
    pub notes: NoteMap,
    /// Source texts by id
    pub sources: SourceMap,
}

impl RecordSet {
    /// Extracts all records from a document using the default [ContinuationStyle].
    pub fn from_document(document: &GedcomDocument) -> Self {
        Self::from_document_with_style(document, ContinuationStyle::default())
    }

    /// Extracts all records from a document.
    ///
    /// # Arguments
    /// * `document` - The parsed document
    /// * `style` - How continuation lines extend note text
    pub fn from_document_with_style(document: &GedcomDocument, style: ContinuationStyle) -> Self {
        let (individuals, families) = extract_entities(document, style);
        let (notes, sources) = resolve_citations(document, style);
        RecordSet {
            individuals,
            families,
            notes,
            sources,
        }
    }

    /// Returns the individual with `id`, if any.
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Returns the family with `id`, if any.
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Resolves a note citation against the note map.
    pub fn resolve_note<'a>(&'a self, citation: &'a Citation) -> ResolvedText<'a> {
        citation.resolve(&self.notes)
    }

    /// Resolves a source citation against the source map.
    pub fn resolve_source<'a>(&'a self, citation: &'a Citation) -> ResolvedText<'a> {
        citation.resolve(&self.sources)
    }

    /// Resolves the pedigree of the individual `id`.
    ///
    /// See [resolve_pedigree].
    pub fn pedigree(&self, id: &str) -> Result<Pedigree, PedigreeError> {
        resolve_pedigree(id, &self.individuals, &self.families)
    }
}
