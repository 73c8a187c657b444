//! Data model for parsed GEDCOM files.
//!
//! # Tree representation
//! A file is represented by a [Forest], which uses the arena pattern to store
//! [GedcomNode]s referenced by [NodeIndex]. Each node knows its parent and
//! its children (in file order) only by index, so the forest alone owns all
//! nodes and no reference-counted sharing is needed.
//!
//! # Building forests
//! Forests are built with a [ForestBuilder], which consumes tokenized lines
//! in file order and keeps a stack of open nodes by level. Together with the
//! [XrefIndex] of declared ids the result is a [GedcomDocument].
//!
//! # Cross-references
//! Ids such as `@I1@` are stored without their delimiters (`I1`).
//! Duplicate declarations follow a last-write-wins rule, see [XrefIndex].

pub mod document;
pub mod forest;
pub mod forest_builder;
pub mod node;
pub mod xref_index;

pub use document::GedcomDocument;
pub use forest::{Forest, NodeIndex, PreOrderIter};
pub use forest_builder::{ForestBuilder, build_document};
pub use node::GedcomNode;
pub use xref_index::XrefIndex;
