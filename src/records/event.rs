//! Extraction of dated and placed occurrences.

use crate::gedcom::defs::{DATE, PLACE};
use crate::model::{Forest, NodeIndex};
use serde::Serialize;

// =#========================================================================#=
// EVENT
// =#========================================================================#=
/// An occurrence such as a birth, death or marriage.
///
/// `kind` is the tag of the originating node (e.g. `BIRT`); `date` and
/// `place` are empty if the node does not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Tag of the originating node
    #[serde(rename = "type")]
    pub kind: String,
    /// Date as written in the file
    pub date: String,
    /// Place as written in the file
    pub place: String,
}

/// Extracts an [Event] from the node at `index`.
///
/// Only direct children are scanned: `DATE` sets the date and `PLAC` the
/// place, a later occurrence overwriting an earlier one. Deeper nodes and
/// all other tags are ignored.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn extract_event(forest: &Forest, index: NodeIndex) -> Event {
    let mut event = Event {
        kind: forest[index].tag().to_string(),
        ..Event::default()
    };

    for child in forest.children_of(index) {
        match child.tag() {
            DATE => event.date = child.value().to_string(),
            PLACE => event.place = child.value().to_string(),
            _ => {}
        }
    }

    event
}
