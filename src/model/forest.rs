//! Forest module for the GEDCOM tree representation.
//!
//! This module provides the core data structure holding a parsed file:
//! - `Forest`: all nodes of a file in one arena, plus the list of roots.
//! - `NodeIndex` is used to index nodes.

use crate::model::node::GedcomNode;
use crate::parser::line_tokenizer::TokenizedLine;

/// Index of a node in a forest (arena).
pub type NodeIndex = usize;

// =#========================================================================#=
// FOREST
// =#========================================================================#=
/// The nodes of a GEDCOM file represented using the arena pattern on [GedcomNode].
///
/// Nodes are stored in a contiguous vector in file order and referenced by
/// [NodeIndex]. Each level-0 record (and every line without a possible
/// ancestor) is a root. The forest exclusively owns all nodes, so there are
/// no reference cycles by construction.
///
/// # Construction
/// Forests are assembled by a [ForestBuilder](crate::model::ForestBuilder),
/// which appends nodes in file order and links them to their parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    /// Nodes of this forest in file order (arena pattern)
    nodes: Vec<GedcomNode>,
    /// Indices of the root nodes in file order
    roots: Vec<NodeIndex>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Forest {
    /// Creates a new empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty forest with capacity for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Forest {
            nodes: Vec::with_capacity(num_nodes),
            roots: Vec::new(),
        }
    }

    /// Adds a node as a new root, returning its index.
    pub(crate) fn add_root(&mut self, line: &TokenizedLine<'_>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(GedcomNode::from_line(index, line));
        self.roots.push(index);
        index
    }

    /// Adds a node as last child of `parent`, returning its index.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub(crate) fn add_child(&mut self, parent: NodeIndex, line: &TokenizedLine<'_>) -> NodeIndex {
        let index = self.nodes.len();
        let mut node = GedcomNode::from_line(index, line);
        node.set_parent(parent);
        self.nodes.push(node);
        self[parent].push_child(index);
        index
    }

    /// Returns the indices of the roots in file order.
    pub fn root_indices(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Returns an iterator over the root nodes in file order.
    pub fn roots(&self) -> impl Iterator<Item = &GedcomNode> {
        self.roots.iter().map(|&index| &self.nodes[index])
    }

    /// Returns the number of roots.
    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether this forest holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the node at the given index, or `None` if out of bounds.
    pub fn node(&self, index: NodeIndex) -> Option<&GedcomNode> {
        self.nodes.get(index)
    }

    /// Returns an iterator over all nodes in file order.
    pub fn nodes(&self) -> impl Iterator<Item = &GedcomNode> {
        self.nodes.iter()
    }

    /// Returns an iterator over the direct children of a node in file order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn children_of(&self, index: NodeIndex) -> impl Iterator<Item = &GedcomNode> {
        self[index].children().iter().map(|&child| &self.nodes[child])
    }

    /// Returns the first direct child of a node with the given tag.
    pub fn child_with_tag(&self, index: NodeIndex, tag: &str) -> Option<&GedcomNode> {
        self.children_of(index).find(|child| child.has_tag(tag))
    }

    /// Returns the number of nodes in the subtree rooted at `index`, including itself.
    pub fn subtree_size(&self, index: NodeIndex) -> usize {
        self.pre_order_iter(index).count()
    }

    /// Checks the structural invariants of this forest.
    ///
    /// Checks:
    /// - All node indices match their position in the arena
    /// - Roots have no parent, all other nodes have a parent listing them as child
    /// - Children have strictly greater levels than their parent
    /// - Each node is either a root or a child exactly once
    ///
    /// # Returns
    /// `true` if forest is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let mut seen = vec![false; self.nodes.len()];

        for &root in &self.roots {
            match self.nodes.get(root) {
                Some(node) if node.is_root() => {}
                _ => return false,
            }
            if std::mem::replace(&mut seen[root], true) {
                return false;
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            for &child in node.children() {
                let Some(child_node) = self.nodes.get(child) else {
                    return false;
                };
                if child_node.parent_index() != Some(index) || child_node.level() <= node.level() {
                    return false;
                }
                if std::mem::replace(&mut seen[child], true) {
                    return false;
                }
            }
        }

        seen.into_iter().all(|s| s)
    }
}

impl std::ops::Index<NodeIndex> for Forest {
    type Output = GedcomNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for Forest {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
impl Forest {
    /// Returns an iterator over the subtree at `index` in pre-order
    /// (parents before children, children in file order).
    ///
    /// Pre-order over a record reproduces the order of its lines in the file.
    ///
    /// # Example
    /// ```
    /// use gedwick::parse_gedcom_str;
    ///
    /// let document = parse_gedcom_str("0 @I1@ INDI\n1 BIRT\n2 DATE 1900\n1 SEX M\n");
    /// let forest = document.forest();
    /// let root = forest.root_indices()[0];
    ///
    /// let tags: Vec<_> = forest.pre_order_iter(root).map(|n| n.tag()).collect();
    /// assert_eq!(tags, ["INDI", "BIRT", "DATE", "SEX"]);
    /// ```
    pub fn pre_order_iter(&self, index: NodeIndex) -> PreOrderIter<'_> {
        PreOrderIter::new(self, index)
    }
}

/// Iterator for pre-order traversal of a subtree (parents before children).
///
/// This iterator uses a stack-based approach to traverse the subtree without
/// recursion, so deep nesting cannot overflow the call stack.
pub struct PreOrderIter<'a> {
    forest: &'a Forest,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(forest: &'a Forest, index: NodeIndex) -> Self {
        let mut stack = Vec::new();
        if index < forest.num_nodes() {
            stack.push(index);
        }
        PreOrderIter { forest, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a GedcomNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.forest[index];

        // Push children in reverse, so the first child is processed first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}
