//! Notes and sources: resolution of free-text records and citations.
//!
//! This module provides:
//! - [resolve_citations]: builds the id→text maps for `NOTE` and `SOUR` records
//! - [Citation]: a note or source attached to an individual or family
//! - [ResolvedText]: the display form of a citation after lookup
//! - [ContinuationStyle]: how `CONT`/`CONC` lines extend note text

use crate::gedcom::defs::{CONCATENATION, CONTINUATION, NOTE, SOURCE};
use crate::model::{Forest, GedcomDocument, NodeIndex};
use crate::parser::line_tokenizer::as_pointer;
use indexmap::IndexMap;
use std::fmt;
use std::fmt::Display;

/// Note id → resolved note text.
pub type NoteMap = IndexMap<String, String>;

/// Source id → source text.
pub type SourceMap = IndexMap<String, String>;

// =#========================================================================#=
// CONTINUATION STYLE
// =#========================================================================#=
/// Specifies how continuation children extend the text of their parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContinuationStyle {
    /// Both `CONT` and `CONC` start a new line.
    ///
    /// This is the default and treats the two tags alike.
    #[default]
    Newline,

    /// `CONT` starts a new line, `CONC` appends directly without separator,
    /// as the GEDCOM standard defines them.
    Gedcom,
}

impl ContinuationStyle {
    /// Returns the separator put before the value of a child with `tag`,
    /// or `None` if the tag is not a continuation.
    fn separator(&self, tag: &str) -> Option<&'static str> {
        match (self, tag) {
            (_, CONTINUATION) => Some("\n"),
            (ContinuationStyle::Newline, CONCATENATION) => Some("\n"),
            (ContinuationStyle::Gedcom, CONCATENATION) => Some(""),
            _ => None,
        }
    }
}

/// Returns the value of the node at `index` extended by its direct
/// continuation children in document order.
///
/// # Example
/// ```
/// use gedwick::parse_gedcom_str;
/// use gedwick::records::{ContinuationStyle, continued_text};
///
/// let document = parse_gedcom_str("0 @N1@ NOTE Fir\n1 CONC st\n1 CONT Second");
/// let forest = document.forest();
///
/// assert_eq!(continued_text(forest, 0, ContinuationStyle::Newline), "Fir\nst\nSecond");
/// assert_eq!(continued_text(forest, 0, ContinuationStyle::Gedcom), "First\nSecond");
/// ```
pub fn continued_text(forest: &Forest, index: NodeIndex, style: ContinuationStyle) -> String {
    let mut text = forest[index].value().to_string();
    for child in forest.children_of(index) {
        if let Some(separator) = style.separator(child.tag()) {
            text.push_str(separator);
            text.push_str(child.value());
        }
    }
    text
}

// =#========================================================================#=
// RESOLVING
// =#========================================================================#=
/// Builds the note and source maps from all declared `NOTE` and `SOUR` records.
///
/// A note resolves to its value followed by the values of its direct
/// continuation children (see [ContinuationStyle]). A source resolves to its
/// value verbatim; its children are not descended into.
///
/// # Returns
/// `(notes, sources)`, both in order of first declaration
pub fn resolve_citations(document: &GedcomDocument, style: ContinuationStyle) -> (NoteMap, SourceMap) {
    let forest = document.forest();
    let mut notes = NoteMap::new();
    let mut sources = SourceMap::new();

    for (id, index) in document.xrefs().iter() {
        let node = &forest[index];
        match node.tag() {
            NOTE => {
                notes.insert(id.to_string(), continued_text(forest, index, style));
            }
            SOURCE => {
                sources.insert(id.to_string(), node.value().to_string());
            }
            _ => {}
        }
    }

    (notes, sources)
}

// =#========================================================================#=
// CITATION
// =#========================================================================#=
/// A note or source attached to an individual or family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Citation {
    /// Pointer to a `NOTE` or `SOUR` record, id without delimiters
    Xref(String),
    /// Text given inline
    Text(String),
}

impl Citation {
    /// Creates a citation from the citing node: a pointer value becomes
    /// [Citation::Xref], anything else [Citation::Text].
    ///
    /// Inline note text takes its continuations; inline source text is the
    /// value only, like a declared source record.
    pub(crate) fn from_node(forest: &Forest, index: NodeIndex, style: ContinuationStyle) -> Self {
        let node = &forest[index];
        match as_pointer(node.value()) {
            Some(id) => Citation::Xref(id.to_string()),
            None if node.tag() == SOURCE => Citation::Text(node.value().to_string()),
            None => Citation::Text(continued_text(forest, index, style)),
        }
    }

    /// Looks this citation up in `map`.
    pub fn resolve<'a>(&'a self, map: &'a IndexMap<String, String>) -> ResolvedText<'a> {
        match self {
            Citation::Xref(id) => match map.get(id) {
                Some(text) => ResolvedText::Resolved { id, text },
                None => ResolvedText::Unresolved(id),
            },
            Citation::Text(text) => ResolvedText::Inline(text),
        }
    }
}

// =#========================================================================#=
// RESOLVED TEXT
// =#========================================================================#=
/// A [Citation] after lookup in a note or source map.
///
/// An unresolved pointer is not an error: it displays as the raw id,
/// flagged with `(unresolved)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedText<'a> {
    /// Pointer found in the map
    Resolved {
        /// Id of the cited record
        id: &'a str,
        /// Text of the cited record
        text: &'a str,
    },
    /// Inline text
    Inline(&'a str),
    /// Pointer to an id absent from the map
    Unresolved(&'a str),
}

impl ResolvedText<'_> {
    /// Returns whether the citation could not be resolved.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ResolvedText::Unresolved(_))
    }
}

impl Display for ResolvedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolvedText::Resolved { text, .. } => write!(f, "{text}"),
            ResolvedText::Inline(text) => write!(f, "{text}"),
            ResolvedText::Unresolved(id) => write!(f, "{id} (unresolved)"),
        }
    }
}
