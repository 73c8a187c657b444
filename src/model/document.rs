//! Parsed GEDCOM document: node forest plus cross-reference index.

use crate::model::forest::{Forest, NodeIndex};
use crate::model::node::GedcomNode;
use crate::model::xref_index::XrefIndex;

// =#========================================================================#=
// GEDCOM DOCUMENT
// =#========================================================================#=
/// Result of tree building over one GEDCOM input.
///
/// Holds the [Forest] of all nodes, the [XrefIndex] of declared ids, and the
/// number of lines skipped because they could not be tokenized.
/// A document is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GedcomDocument {
    forest: Forest,
    xrefs: XrefIndex,
    skipped_lines: usize,
}

impl GedcomDocument {
    pub(crate) fn new(forest: Forest, xrefs: XrefIndex, skipped_lines: usize) -> Self {
        GedcomDocument {
            forest,
            xrefs,
            skipped_lines,
        }
    }

    /// Returns the node forest.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Returns the cross-reference index.
    pub fn xrefs(&self) -> &XrefIndex {
        &self.xrefs
    }

    /// Returns the number of input lines that were skipped as malformed.
    pub fn num_skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Returns the node declaring `id`, if any.
    pub fn declaration(&self, id: &str) -> Option<&GedcomNode> {
        self.xrefs.get(id).map(|index| &self.forest[index])
    }

    /// Returns an iterator over `(id, node)` for all declared ids,
    /// in order of first declaration, each resolved to its winning node.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &GedcomNode)> {
        self.xrefs.iter().map(|(id, index)| (id, &self.forest[index]))
    }

    /// Returns an iterator over declared `(id, node index)` pairs whose node has `tag`.
    pub fn declarations_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = (&'a str, NodeIndex)> {
        self.xrefs.iter().filter(move |&(_, index)| self.forest[index].has_tag(tag))
    }

    /// Splits the document into its forest and index.
    pub fn into_parts(self) -> (Forest, XrefIndex) {
        (self.forest, self.xrefs)
    }
}
