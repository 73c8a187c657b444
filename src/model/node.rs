//! Node module for the GEDCOM tree representation.

use crate::model::forest::NodeIndex;
use crate::parser::line_tokenizer::{Level, TokenizedLine};

// =#========================================================================#=
// GEDCOM NODE
// =#========================================================================#=
/// Represents one line of a GEDCOM file placed in the tree.
///
/// Nodes live in the arena of a [Forest](crate::model::Forest) and refer to
/// their parent and children only by [NodeIndex].
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - every child has a level strictly greater than `level`
/// - `children` are in file order
/// - `xref` is stored without delimiters (`@I1@` is kept as `I1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomNode {
    /// Index of this node in the forest arena
    index: NodeIndex,
    /// Nesting level as written in the file
    level: Level,
    /// Declared cross-reference id, if any
    xref: Option<String>,
    /// Tag such as `INDI` or `NAME`
    tag: String,
    /// Trimmed value, possibly empty
    value: String,
    /// Index of the enclosing node, `None` for roots
    parent: Option<NodeIndex>,
    /// Indices of the child nodes in file order
    children: Vec<NodeIndex>,
}

impl GedcomNode {
    /// Creates a new node without parent and children from a tokenized line.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the forest (arena)
    /// * `line` - The tokenized line this node represents
    pub(crate) fn from_line(index: NodeIndex, line: &TokenizedLine<'_>) -> Self {
        GedcomNode {
            index,
            level: line.level,
            xref: line.xref.map(str::to_string),
            tag: line.tag.to_string(),
            value: line.value.to_string(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the level of this node.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the declared cross-reference id, if any.
    pub fn xref(&self) -> Option<&str> {
        self.xref.as_deref()
    }

    /// Returns the tag of this node.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of this node (empty if none was given).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the index of the parent, `None` for roots.
    pub fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns whether this node is a root of its forest.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the indices of the children in file order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node carries the given tag.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }
}
