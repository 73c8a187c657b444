//! Property-based tests for tree building and GEDCOM writing.
//!
//! Random sequences of well-formed lines are parsed, written back and
//! parsed again; the structure must survive unchanged.

use gedwick::gedcom::to_gedcom;
use gedwick::parse_gedcom_str;
use gedwick::records::RecordSet;
use proptest::prelude::*;

/// Strategy for one well-formed GEDCOM line.
fn gedcom_line() -> impl Strategy<Value = (u32, String)> {
    (
        0u32..5,
        proptest::option::of("[A-Z][0-9]{1,3}"),
        "[A-Z_]{1,5}",
        "[a-zA-Z0-9 /@]{0,12}",
    )
        .prop_map(|(level, xref, tag, value)| {
            let line = match xref {
                Some(xref) => format!("{level} @{xref}@ {tag} {value}"),
                None => format!("{level} {tag} {value}"),
            };
            (level, line)
        })
}

fn gedcom_lines() -> impl Strategy<Value = Vec<(u32, String)>> {
    prop::collection::vec(gedcom_line(), 0..40)
}

fn join(lines: &[(u32, String)]) -> String {
    lines.iter().map(|(_, line)| line.as_str()).collect::<Vec<_>>().join("\n")
}

proptest! {
    #[test]
    fn written_forest_parses_to_same_document(lines in gedcom_lines()) {
        let document = parse_gedcom_str(join(&lines));
        let written = to_gedcom(document.forest());
        let reparsed = parse_gedcom_str(&written);

        prop_assert_eq!(document.num_skipped_lines(), 0);
        prop_assert_eq!(&reparsed, &document);
        // Writing is stable after one normalization
        prop_assert_eq!(to_gedcom(reparsed.forest()), written);
    }

    #[test]
    fn every_line_becomes_one_node(lines in gedcom_lines()) {
        let document = parse_gedcom_str(join(&lines));

        prop_assert_eq!(document.forest().num_nodes(), lines.len());
        prop_assert!(document.forest().is_valid());
    }

    #[test]
    fn lines_at_the_lowest_level_so_far_are_the_roots(lines in gedcom_lines()) {
        let document = parse_gedcom_str(join(&lines));
        let forest = document.forest();

        // A line is a root iff no earlier line has a lower level
        let mut min_level = u32::MAX;
        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, (level, _))| {
                let is_root = *level <= min_level;
                min_level = min_level.min(*level);
                is_root
            })
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(forest.root_indices(), expected.as_slice());
        prop_assert_eq!(forest.num_roots(), expected.len());
        if lines.first().is_some_and(|(level, _)| *level == 0) {
            let num_level_zero = lines.iter().filter(|(level, _)| *level == 0).count();
            prop_assert_eq!(forest.num_roots(), num_level_zero);
        }
    }

    #[test]
    fn extraction_never_panics_and_is_idempotent(lines in gedcom_lines()) {
        let document = parse_gedcom_str(join(&lines));

        let first = RecordSet::from_document(&document);
        prop_assert_eq!(first, RecordSet::from_document(&document));
    }
}
