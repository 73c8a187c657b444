//! Level-stack construction of a [Forest] from GEDCOM lines.
//!
//! GEDCOM encodes nesting only through the leading level number of each line.
//! The [ForestBuilder] recovers the tree by keeping a stack of the currently
//! open nodes: each new line closes every open node at the same or a deeper
//! level, then attaches to whatever remains on top (or becomes a root).
//!
//! # Builder lifecycle
//! ```text
//! new() ──→ push()/push_line() ... ──→ finish() ──→ GedcomDocument
//! ```
//!
//! # Tolerance
//! Level jumps larger than one are not validated: `0 INDI` directly followed
//! by `3 DATE` attaches the `DATE` node to the `INDI` node. Lines rejected by
//! the tokenizer leave the stack untouched and are only counted.

use crate::model::document::GedcomDocument;
use crate::model::forest::{Forest, NodeIndex};
use crate::model::xref_index::XrefIndex;
use crate::parser::line_source::LineSource;
use crate::parser::line_tokenizer::{TokenizedLine, tokenize_line};
use crate::parser::parsing_error::ParsingError;
use tracing::{info, trace};

// =#========================================================================#=
// FOREST BUILDER
// =#========================================================================T=
/// Builds a [GedcomDocument] from lines fed in file order.
///
/// # Example
/// ```
/// use gedwick::model::ForestBuilder;
///
/// let mut builder = ForestBuilder::new();
/// for line in ["0 @I1@ INDI", "1 NAME John /Doe/", "not a line", "0 TRLR"] {
///     builder.push_line(line);
/// }
/// let document = builder.finish();
///
/// assert_eq!(document.forest().num_roots(), 2);
/// assert_eq!(document.num_skipped_lines(), 1);
/// assert!(document.xrefs().contains("I1"));
/// ```
#[derive(Debug, Default)]
pub struct ForestBuilder {
    forest: Forest,
    xrefs: XrefIndex,
    /// Currently open nodes, levels strictly increasing from bottom to top
    open: Vec<NodeIndex>,
    skipped_lines: usize,
}

impl ForestBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder with room for `num_lines` nodes.
    pub fn with_capacity(num_lines: usize) -> Self {
        ForestBuilder {
            forest: Forest::with_capacity(num_lines),
            ..Self::default()
        }
    }

    /// Tokenizes and adds one raw line.
    ///
    /// # Returns
    /// `true` if the line produced a node, `false` if it was skipped
    pub fn push_line(&mut self, line: &str) -> bool {
        match tokenize_line(line) {
            Some(tokenized) => {
                self.push(&tokenized);
                true
            }
            None => {
                self.skipped_lines += 1;
                false
            }
        }
    }

    /// Adds one tokenized line as a node.
    ///
    /// Closes all open nodes whose level is greater than or equal to the
    /// line's level, then attaches the new node to the remaining top of the
    /// stack, or makes it a root if the stack is empty.
    /// A declared xref is recorded right away (last declaration wins).
    ///
    /// # Returns
    /// The index of the new node
    pub fn push(&mut self, line: &TokenizedLine<'_>) -> NodeIndex {
        while let Some(&top) = self.open.last() {
            if self.forest[top].level() < line.level {
                break;
            }
            self.open.pop();
        }

        let index = match self.open.last() {
            Some(&parent) => self.forest.add_child(parent, line),
            None => self.forest.add_root(line),
        };

        if let Some(xref) = line.xref {
            self.xrefs.declare(xref, index);
        }

        self.open.push(index);
        index
    }

    /// Feeds all lines of a [LineSource] into this builder.
    ///
    /// # Errors
    /// Returns [ParsingError::Io] if the source fails to deliver a line.
    pub fn push_source<S: LineSource>(&mut self, source: &mut S) -> Result<(), ParsingError> {
        loop {
            let line_number = source.line_number();
            let line = match source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(()),
                Err(err) => return Err(ParsingError::io(line_number, err)),
            };

            if !self.push_line(line) && !line.trim().is_empty() {
                trace!(line = line_number + 1, content = line, "skipping malformed line");
            }
        }
    }

    /// Returns the number of nodes added so far.
    pub fn num_nodes(&self) -> usize {
        self.forest.num_nodes()
    }

    /// Finishes building, closing all open nodes.
    pub fn finish(self) -> GedcomDocument {
        info!(
            nodes = self.forest.num_nodes(),
            roots = self.forest.num_roots(),
            xrefs = self.xrefs.len(),
            skipped = self.skipped_lines,
            "built GEDCOM forest"
        );
        GedcomDocument::new(self.forest, self.xrefs, self.skipped_lines)
    }
}

// ============================================================================
// Building from text (pub)
// ============================================================================
/// Builds a document from any sequence of raw lines.
///
/// # Example
/// ```
/// use gedwick::model::build_document;
///
/// let document = build_document(["0 @F1@ FAM", "1 HUSB @I1@"]);
/// assert_eq!(document.forest().num_nodes(), 2);
/// ```
pub fn build_document<I, S>(lines: I) -> GedcomDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = ForestBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}
