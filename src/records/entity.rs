//! Extraction of individuals and families from a parsed document.

use crate::gedcom::defs::*;
use crate::model::{Forest, GedcomDocument, NodeIndex};
use crate::parser::line_tokenizer::strip_pointer;
use crate::records::citation::{Citation, ContinuationStyle};
use crate::records::event::{Event, extract_event};
use indexmap::IndexMap;
use tracing::debug;

/// Individual id → individual.
pub type IndividualMap = IndexMap<String, Individual>;

/// Family id → family.
pub type FamilyMap = IndexMap<String, Family>;

// =#========================================================================#=
// INDIVIDUAL
// =#========================================================================#=
/// A person declared by an `INDI` record.
///
/// Single-valued fields are empty (or `None`) when absent; if a tag occurs
/// more than once, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Individual {
    /// Declared id (without delimiters)
    pub id: String,
    /// Name as written, e.g. `John /Doe/`
    pub name: String,
    /// Sex as written, e.g. `M`
    pub sex: String,
    /// Birth and death events in file order
    pub events: Vec<Event>,
    /// Family in which this individual is a child
    pub famc: Option<String>,
    /// Families in which this individual is a spouse, in file order
    pub fams: Vec<String>,
    /// Attached notes
    pub notes: Vec<Citation>,
    /// Attached sources
    pub sources: Vec<Citation>,
}

impl Individual {
    /// Builds an individual from the `INDI` node at `index`.
    fn from_node(id: &str, forest: &Forest, index: NodeIndex, style: ContinuationStyle) -> Self {
        let mut individual = Individual {
            id: id.to_string(),
            ..Individual::default()
        };

        for child in forest.children_of(index) {
            let value = child.value();
            match child.tag() {
                NAME => individual.name = value.to_string(),
                SEX => individual.sex = value.to_string(),
                FAMILY_CHILD => individual.famc = Some(strip_pointer(value).to_string()),
                FAMILY_SPOUSE => individual.fams.push(strip_pointer(value).to_string()),
                NOTE => individual.notes.push(Citation::from_node(forest, child.index(), style)),
                SOURCE => individual.sources.push(Citation::from_node(forest, child.index(), style)),
                tag if INDIVIDUAL_EVENTS.contains(&tag) => {
                    individual.events.push(extract_event(forest, child.index()));
                }
                _ => {}
            }
        }

        individual
    }
}

// =#========================================================================#=
// FAMILY
// =#========================================================================#=
/// A family declared by a `FAM` record.
///
/// Husband and wife ids are empty when absent; if given more than once,
/// the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    /// Declared id (without delimiters)
    pub id: String,
    /// Id of the husband, possibly empty
    pub husband_id: String,
    /// Id of the wife, possibly empty
    pub wife_id: String,
    /// Ids of the children in file order
    pub children_ids: Vec<String>,
    /// Marriage events in file order
    pub events: Vec<Event>,
    /// Attached notes
    pub notes: Vec<Citation>,
    /// Attached sources
    pub sources: Vec<Citation>,
}

impl Family {
    /// Builds a family from the `FAM` node at `index`.
    fn from_node(id: &str, forest: &Forest, index: NodeIndex, style: ContinuationStyle) -> Self {
        let mut family = Family {
            id: id.to_string(),
            ..Family::default()
        };

        for child in forest.children_of(index) {
            let value = child.value();
            match child.tag() {
                HUSBAND => family.husband_id = strip_pointer(value).to_string(),
                WIFE => family.wife_id = strip_pointer(value).to_string(),
                CHILD => family.children_ids.push(strip_pointer(value).to_string()),
                NOTE => family.notes.push(Citation::from_node(forest, child.index(), style)),
                SOURCE => family.sources.push(Citation::from_node(forest, child.index(), style)),
                tag if FAMILY_EVENTS.contains(&tag) => {
                    family.events.push(extract_event(forest, child.index()));
                }
                _ => {}
            }
        }

        family
    }

    /// Returns the ids of husband and wife that are set, husband first.
    pub fn parent_ids(&self) -> impl Iterator<Item = &str> {
        [self.husband_id.as_str(), self.wife_id.as_str()]
            .into_iter()
            .filter(|id| !id.is_empty())
    }
}

// =#========================================================================#=
// EXTRACTING
// =#========================================================================#=
/// Extracts all individuals and families from the declared records of a document.
///
/// Walks the cross-reference index once; `INDI` nodes become [Individual]s,
/// `FAM` nodes [Family]s, all other records are left alone. Map keys are the
/// declared ids, in order of first declaration. Records without a declared
/// id cannot be reached through the index and are therefore absent.
///
/// Extraction never fails and is idempotent.
///
/// # Example
/// ```
/// use gedwick::parse_gedcom_str;
/// use gedwick::records::{ContinuationStyle, extract_entities};
///
/// let document = parse_gedcom_str("0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M");
/// let (individuals, families) = extract_entities(&document, ContinuationStyle::default());
///
/// assert_eq!(individuals["I1"].name, "John /Doe/");
/// assert!(families.is_empty());
/// ```
pub fn extract_entities(document: &GedcomDocument, style: ContinuationStyle) -> (IndividualMap, FamilyMap) {
    let forest = document.forest();
    let mut individuals = IndividualMap::new();
    let mut families = FamilyMap::new();

    for (id, index) in document.xrefs().iter() {
        match forest[index].tag() {
            INDIVIDUAL => {
                individuals.insert(id.to_string(), Individual::from_node(id, forest, index, style));
            }
            FAMILY => {
                families.insert(id.to_string(), Family::from_node(id, forest, index, style));
            }
            _ => {}
        }
    }

    debug!(
        individuals = individuals.len(),
        families = families.len(),
        "extracted entities"
    );
    (individuals, families)
}
