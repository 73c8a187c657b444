//! Ancestor resolution: building the pedigree of an individual.
//!
//! Starting from one individual, the resolver follows the child-of-family link
//! (`FAMC`) to the family and from there to husband and wife, one generation
//! back per step. Genealogical data can contain referential cycles (a person
//! recorded as their own ancestor); those are reported as
//! [PedigreeError::CyclicAncestry] instead of looping forever.
//!
//! # Representation
//! A [Pedigree] stores every distinct ancestor once, in an arena of
//! [PedigreeNode]s referencing their parents by [PedigreeIndex]. An ancestor
//! reached along several lines (pedigree collapse) is shared, so the size of
//! a pedigree is linear in the number of individuals. The tree view, with one
//! entry per line of descent, is unfolded lazily by [Pedigree::iter].

use crate::records::entity::{FamilyMap, IndividualMap};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Index of a node in a pedigree (arena).
pub type PedigreeIndex = usize;

// =#========================================================================#=
// PEDIGREE ERROR
// =#========================================================================$=
/// Error returned by [resolve_pedigree].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PedigreeError {
    /// The starting id is not in the individual map.
    #[error("Unknown individual {0}")]
    UnknownIndividual(String),

    /// An individual is reachable as their own ancestor.
    #[error("Cyclic ancestry - {id} is their own ancestor (via {})", path.join(" -> "))]
    CyclicAncestry {
        /// Id met a second time on one line of descent
        id: String,
        /// Ids from the starting individual down to the repeated one
        path: Vec<String>,
    },
}

// =#========================================================================#=
// PEDIGREE NODE
// =#========================================================================#=
/// One individual in a [Pedigree], with the indices of their parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedigreeNode {
    /// Id of the individual
    pub id: String,
    /// Husband of the child-of family, if resolved
    pub father: Option<PedigreeIndex>,
    /// Wife of the child-of family, if resolved
    pub mother: Option<PedigreeIndex>,
}

impl PedigreeNode {
    /// Returns the indices of the resolved parents, father first.
    pub fn parent_indices(&self) -> impl Iterator<Item = PedigreeIndex> {
        self.father.into_iter().chain(self.mother)
    }

    /// Returns whether no parent could be resolved.
    pub fn is_leaf(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }
}

// =#========================================================================#=
// PEDIGREE
// =#========================================================================#=
/// The ancestors of one individual.
///
/// # Invariants
/// - Each individual occurs at most once in the arena
/// - Parents have smaller indices than their children
/// - The starting individual is the last node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pedigree {
    nodes: Vec<PedigreeNode>,
}

impl Pedigree {
    /// Returns the index of the starting individual.
    pub fn root_index(&self) -> PedigreeIndex {
        self.nodes.len() - 1
    }

    /// Returns the starting individual.
    pub fn root(&self) -> &PedigreeNode {
        &self.nodes[self.root_index()]
    }

    /// Returns the node at `index`, or `None` if out of bounds.
    pub fn node(&self, index: PedigreeIndex) -> Option<&PedigreeNode> {
        self.nodes.get(index)
    }

    /// Returns the node of the individual `id`, if they are in this pedigree.
    pub fn find(&self, id: &str) -> Option<&PedigreeNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns the father of `node`, if resolved.
    pub fn father_of(&self, node: &PedigreeNode) -> Option<&PedigreeNode> {
        node.father.map(|index| &self.nodes[index])
    }

    /// Returns the mother of `node`, if resolved.
    pub fn mother_of(&self, node: &PedigreeNode) -> Option<&PedigreeNode> {
        node.mother.map(|index| &self.nodes[index])
    }

    /// Returns an iterator over the resolved parents of `node`, father first.
    pub fn parents_of<'a>(&'a self, node: &'a PedigreeNode) -> impl Iterator<Item = &'a PedigreeNode> {
        node.parent_indices().map(move |index| &self.nodes[index])
    }

    /// Returns the number of distinct individuals, starting individual included.
    pub fn num_individuals(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of generations of the longest line of descent
    /// (0 if no parent is known).
    pub fn max_depth(&self) -> usize {
        // Parents precede their children, so one pass in index order suffices
        let mut heights: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let height = node
                .parent_indices()
                .map(|parent| heights[parent] + 1)
                .max()
                .unwrap_or(0);
            heights.push(height);
        }
        heights.last().copied().unwrap_or(0)
    }

    /// Returns an iterator over the pedigree unfolded as a tree, in pre-order.
    ///
    /// Yields `(depth, node)` with the starting individual at depth 0, each
    /// individual before their father's line, and the father's line before
    /// the mother's. An ancestor reached along several lines is yielded once
    /// per line. Entries are produced on demand, so taking a prefix is cheap
    /// even if the unfolded tree is huge.
    pub fn iter(&self) -> PedigreeIter<'_> {
        PedigreeIter {
            pedigree: self,
            stack: vec![(0, self.root_index())],
        }
    }
}

impl std::ops::Index<PedigreeIndex> for Pedigree {
    type Output = PedigreeNode;

    fn index(&self, index: PedigreeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

/// Lazy pre-order iterator over a [Pedigree] unfolded as a tree.
pub struct PedigreeIter<'a> {
    pedigree: &'a Pedigree,
    stack: Vec<(usize, PedigreeIndex)>,
}

impl<'a> Iterator for PedigreeIter<'a> {
    type Item = (usize, &'a PedigreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, index) = self.stack.pop()?;
        let node = &self.pedigree.nodes[index];

        // Mother first onto the stack, so the father's line comes out first
        if let Some(mother) = node.mother {
            self.stack.push((depth + 1, mother));
        }
        if let Some(father) = node.father {
            self.stack.push((depth + 1, father));
        }

        Some((depth, node))
    }
}

// =#========================================================================#=
// RESOLVING
// =#========================================================================#=
/// Resolves the pedigree of the individual `id`.
///
/// Recursion into a generation stops when the individual has no `famc`, the
/// `famc` id is not in `families`, or a parent id is not in `individuals`
/// (such a parent is left out). The same ancestor may appear along several
/// lines (pedigree collapse); only an id repeating on a single line of
/// descent is a cycle.
///
/// The walk uses an explicit stack, so arbitrarily long lines of descent
/// are resolved without deep recursion.
///
/// # Errors
/// * [PedigreeError::UnknownIndividual] - if `id` is not in `individuals`
/// * [PedigreeError::CyclicAncestry] - if an individual is their own ancestor
///
/// # Example
/// ```
/// use gedwick::parse_gedcom_str;
/// use gedwick::records::{RecordSet, resolve_pedigree};
///
/// let document = parse_gedcom_str(
///     "0 @I1@ INDI\n1 FAMC @F1@\n0 @I2@ INDI\n0 @I3@ INDI\n0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I3@",
/// );
/// let records = RecordSet::from_document(&document);
/// let pedigree = resolve_pedigree("I1", &records.individuals, &records.families)?;
///
/// assert_eq!(pedigree.num_individuals(), 3);
/// assert_eq!(pedigree.father_of(pedigree.root()).unwrap().id, "I2");
/// # Ok::<(), gedwick::records::PedigreeError>(())
/// ```
pub fn resolve_pedigree(id: &str, individuals: &IndividualMap, families: &FamilyMap) -> Result<Pedigree, PedigreeError> {
    let Some((id, _)) = individuals.get_key_value(id) else {
        return Err(PedigreeError::UnknownIndividual(id.to_string()));
    };

    let resolver = PedigreeResolver {
        individuals,
        families,
        states: HashMap::new(),
        path: Vec::new(),
        nodes: Vec::new(),
    };
    resolver.resolve(id)
}

/// Progress of one individual during resolution.
#[derive(Debug, Clone, Copy)]
enum VisitState {
    /// On the current line of descent, ancestors still being resolved
    OnPath,
    /// Resolved into the arena at the given index
    Done(PedigreeIndex),
}

/// Work item of the depth-first walk.
enum Step<'a> {
    /// Start resolving an individual
    Enter(&'a str),
    /// All ancestors of an individual are resolved
    Exit(&'a str),
}

/// State of one pedigree resolution.
struct PedigreeResolver<'a> {
    individuals: &'a IndividualMap,
    families: &'a FamilyMap,
    states: HashMap<&'a str, VisitState>,
    /// Ids on the current line of descent, for reporting cycles
    path: Vec<&'a str>,
    nodes: Vec<PedigreeNode>,
}

impl<'a> PedigreeResolver<'a> {
    /// Resolves `id`, known to be in the individual map, into a [Pedigree].
    fn resolve(mut self, id: &'a str) -> Result<Pedigree, PedigreeError> {
        let mut stack = vec![Step::Enter(id)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => match self.states.get(id) {
                    Some(VisitState::Done(_)) => {}
                    Some(VisitState::OnPath) => return Err(self.cycle_error(id)),
                    None => {
                        self.states.insert(id, VisitState::OnPath);
                        self.path.push(id);
                        stack.push(Step::Exit(id));

                        let [father, mother] = self.parent_ids(id);
                        stack.extend(mother.map(Step::Enter));
                        stack.extend(father.map(Step::Enter));
                    }
                },
                Step::Exit(id) => {
                    self.path.pop();
                    let [father, mother] = self.parent_ids(id).map(|parent| parent.and_then(|p| self.resolved(p)));
                    let index = self.nodes.len();
                    self.nodes.push(PedigreeNode {
                        id: id.to_string(),
                        father,
                        mother,
                    });
                    self.states.insert(id, VisitState::Done(index));
                }
            }
        }

        debug!(id, individuals = self.nodes.len(), "resolved pedigree");
        Ok(Pedigree { nodes: self.nodes })
    }

    /// Returns the ids of father and mother of `id` that are known individuals.
    fn parent_ids(&self, id: &str) -> [Option<&'a str>; 2] {
        let individuals = self.individuals;
        let Some(family) = individuals[id]
            .famc
            .as_deref()
            .and_then(|famc| self.families.get(famc))
        else {
            return [None, None];
        };

        [family.husband_id.as_str(), family.wife_id.as_str()].map(|parent_id| {
            if parent_id.is_empty() {
                return None;
            }
            match individuals.get_key_value(parent_id) {
                Some((known, _)) => Some(known.as_str()),
                None => {
                    debug!(parent_id, "parent not found among individuals, pedigree ends here");
                    None
                }
            }
        })
    }

    /// Returns the arena index of an individual that has been resolved.
    fn resolved(&self, id: &str) -> Option<PedigreeIndex> {
        match self.states.get(id) {
            Some(VisitState::Done(index)) => Some(*index),
            _ => None,
        }
    }

    /// Builds the error for `id` met again on the current line of descent.
    fn cycle_error(&self, id: &str) -> PedigreeError {
        let mut path: Vec<String> = self.path.iter().map(|s| s.to_string()).collect();
        path.push(id.to_string());
        PedigreeError::CyclicAncestry { id: id.to_string(), path }
    }
}
