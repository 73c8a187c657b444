//! Cross-reference index mapping declared ids to the nodes declaring them.

use crate::model::forest::NodeIndex;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

// =#========================================================================#=
// XREF INDEX
// =#========================================================================#=
/// Maps cross-reference ids (without delimiters) to the [NodeIndex] that
/// declared them.
///
/// # Collision policy
/// If an id is declared more than once, the **last** declaration wins:
/// later declarations replace the node stored for the id. The id keeps the
/// position of its first declaration, so iteration follows the order in
/// which ids first appeared in the file.
///
/// # Example
/// ```
/// use gedwick::model::XrefIndex;
///
/// let mut index = XrefIndex::new();
/// index.declare("I1", 0);
/// index.declare("F1", 3);
/// index.declare("I1", 7);
///
/// assert_eq!(index.get("I1"), Some(7));
/// assert_eq!(index.ids().collect::<Vec<_>>(), ["I1", "F1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XrefIndex {
    map: IndexMap<String, NodeIndex>,
}

impl XrefIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `node` declares `id`, replacing an earlier declaration.
    ///
    /// # Returns
    /// The node index of the replaced declaration, if there was one
    pub fn declare(&mut self, id: &str, node: NodeIndex) -> Option<NodeIndex> {
        match self.map.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                let previous = entry.insert(node);
                debug!(id, previous, node, "duplicate cross-reference id, later declaration wins");
                Some(previous)
            }
            Entry::Vacant(entry) => {
                entry.insert(node);
                None
            }
        }
    }

    /// Returns the node declaring `id`, if any.
    pub fn get(&self, id: &str) -> Option<NodeIndex> {
        self.map.get(id).copied()
    }

    /// Checks if `id` has been declared.
    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Returns the number of distinct declared ids.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether no id has been declared.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the declared ids in order of first declaration.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Returns an iterator over `(id, node)` pairs in order of first declaration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeIndex)> {
        self.map.iter().map(|(id, &node)| (id.as_str(), node))
    }
}
