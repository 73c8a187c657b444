//! GEDCOM line writing for node forests.
//!
//! Each node is written as one line `<level> [@<xref>@ ]<tag>[ <value>]`,
//! in pre-order, so a forest written and parsed again yields the same tree
//! structure. The output is not necessarily byte-identical to the original
//! file: whitespace around fields is normalized and skipped lines are gone.

use crate::model::{Forest, GedcomNode, NodeIndex};
use crate::parser::line_tokenizer::XREF_DELIMITER;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Rough number of characters per written line, used for capacity estimates.
const CHARS_PER_LINE: usize = 24;

/// Returns the GEDCOM line for a single node, without line break.
///
/// # Example
/// ```
/// use gedwick::parse_gedcom_str;
/// use gedwick::gedcom::writer::node_to_line;
///
/// let document = parse_gedcom_str("0   @I1@   INDI  \n1 NAME  John  /Doe/ ");
/// let forest = document.forest();
/// assert_eq!(node_to_line(&forest[0]), "0 @I1@ INDI");
/// assert_eq!(node_to_line(&forest[1]), "1 NAME John  /Doe/");
/// ```
pub fn node_to_line(node: &GedcomNode) -> String {
    let mut line = String::with_capacity(CHARS_PER_LINE);
    push_line(&mut line, node);
    line
}

/// Returns the GEDCOM lines of the subtree rooted at `index`,
/// each terminated by a newline.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn subtree_to_gedcom(forest: &Forest, index: NodeIndex) -> String {
    let mut gedcom = String::with_capacity(forest.subtree_size(index) * CHARS_PER_LINE);
    for node in forest.pre_order_iter(index) {
        push_line(&mut gedcom, node);
        gedcom.push('\n');
    }
    gedcom
}

/// Returns the GEDCOM lines of the whole forest, roots in file order.
pub fn to_gedcom(forest: &Forest) -> String {
    let mut gedcom = String::with_capacity(forest.num_nodes() * CHARS_PER_LINE);
    for &root in forest.root_indices() {
        for node in forest.pre_order_iter(root) {
            push_line(&mut gedcom, node);
            gedcom.push('\n');
        }
    }
    gedcom
}

/// Writes the whole forest to a file in GEDCOM line format.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
///
/// # Example
/// ```ignore
/// use gedwick::gedcom::write_gedcom_file;
///
/// write_gedcom_file("normalized.ged", document.forest())?;
/// ```
pub fn write_gedcom_file<P: AsRef<Path>>(path: P, forest: &Forest) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut line = String::with_capacity(CHARS_PER_LINE);

    for &root in forest.root_indices() {
        for node in forest.pre_order_iter(root) {
            line.clear();
            push_line(&mut line, node);
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()
}

/// Appends the line for `node` to `out`.
fn push_line(out: &mut String, node: &GedcomNode) {
    // Writing into a String cannot fail
    let _ = write!(out, "{}", node.level());
    if let Some(xref) = node.xref() {
        let _ = write!(out, " {XREF_DELIMITER}{xref}{XREF_DELIMITER}");
    }
    out.push(' ');
    out.push_str(node.tag());
    if !node.value().is_empty() {
        out.push(' ');
        out.push_str(node.value());
    }
}
