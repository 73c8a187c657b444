use gedwick::parse_gedcom_str;
use gedwick::records::{PedigreeError, RecordSet, resolve_pedigree};
use std::fmt::Write;

fn records_of(gedcom: &str) -> RecordSet {
    RecordSet::from_document(&parse_gedcom_str(gedcom))
}

// --- TESTS RESOLVING ---
#[test]
fn test_two_parents_without_further_ancestors() {
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n1 FAMS @F1@\n\
         0 @I3@ INDI\n1 FAMS @F1@\n\
         0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I3@\n1 CHIL @I1@",
    );
    let pedigree = records.pedigree("I1").unwrap();

    assert_eq!(pedigree.num_individuals(), 3);
    assert_eq!(pedigree.root().id, "I1");
    assert_eq!(pedigree[pedigree.root_index()], *pedigree.root());

    let father = pedigree.father_of(pedigree.root()).unwrap();
    let mother = pedigree.mother_of(pedigree.root()).unwrap();
    assert_eq!(father.id, "I2");
    assert_eq!(mother.id, "I3");
    assert!(father.is_leaf());
    assert!(mother.is_leaf());
    assert_eq!(pedigree.max_depth(), 1);
}

#[test]
fn test_individual_without_family_is_leaf() {
    let records = records_of("0 @I1@ INDI\n1 NAME Alone");
    let pedigree = records.pedigree("I1").unwrap();

    assert!(pedigree.root().is_leaf());
    assert_eq!(pedigree.num_individuals(), 1);
    assert_eq!(pedigree.max_depth(), 0);
}

#[test]
fn test_three_generations_in_pre_order() {
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n1 FAMC @F2@\n\
         0 @I3@ INDI\n\
         0 @I4@ INDI\n\
         0 @I5@ INDI\n\
         0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I3@\n\
         0 @F2@ FAM\n1 HUSB @I4@\n1 WIFE @I5@",
    );
    let pedigree = resolve_pedigree("I1", &records.individuals, &records.families).unwrap();

    let visited: Vec<_> = pedigree.iter().map(|(depth, n)| (n.id.as_str(), depth)).collect();
    assert_eq!(visited, [("I1", 0), ("I2", 1), ("I4", 2), ("I5", 2), ("I3", 1)]);
    assert_eq!(pedigree.max_depth(), 2);

    let parents: Vec<_> = pedigree.parents_of(pedigree.root()).map(|p| p.id.as_str()).collect();
    assert_eq!(parents, ["I2", "I3"]);

    let grandparents: Vec<_> = pedigree
        .parents_of(pedigree.find("I2").unwrap())
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(grandparents, ["I4", "I5"]);
    assert!(pedigree.find("I9").is_none());
}

#[test]
fn test_pedigree_collapse_is_allowed() {
    // I4 is grandparent of I1 through both parents
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n1 FAMC @F2@\n\
         0 @I3@ INDI\n1 FAMC @F3@\n\
         0 @I4@ INDI\n\
         0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I3@\n\
         0 @F2@ FAM\n1 HUSB @I4@\n\
         0 @F3@ FAM\n1 HUSB @I4@",
    );
    let pedigree = records.pedigree("I1").unwrap();

    let ids: Vec<_> = pedigree.iter().map(|(_, n)| n.id.as_str()).collect();
    assert_eq!(ids, ["I1", "I2", "I4", "I3", "I4"]);

    // I4 is stored once and shared by both parents
    assert_eq!(pedigree.num_individuals(), 4);
    let father = pedigree.father_of(pedigree.root()).unwrap();
    let mother = pedigree.mother_of(pedigree.root()).unwrap();
    assert_eq!(father.father, mother.father);
}

#[test]
fn test_pedigree_collapse_over_many_generations() {
    // Every generation is the child of the same couple A/B of the generation above
    const GENERATIONS: usize = 40;
    let mut gedcom = String::from("0 @I0@ INDI\n1 FAMC @F0@\n");
    for g in 1..=GENERATIONS {
        for person in ["A", "B"] {
            let _ = writeln!(gedcom, "0 @{person}{g}@ INDI");
            if g < GENERATIONS {
                let _ = writeln!(gedcom, "1 FAMC @F{g}@");
            }
        }
    }
    for g in 0..GENERATIONS {
        let _ = writeln!(gedcom, "0 @F{g}@ FAM\n1 HUSB @A{}@\n1 WIFE @B{}@", g + 1, g + 1);
    }
    let records = records_of(&gedcom);

    let pedigree = records.pedigree("I0").unwrap();

    assert_eq!(pedigree.num_individuals(), 2 * GENERATIONS + 1);
    assert_eq!(pedigree.max_depth(), GENERATIONS);

    // The unfolded tree has 2^41 - 1 entries; only a prefix is walked
    let prefix: Vec<_> = pedigree
        .iter()
        .take(GENERATIONS + 3)
        .map(|(depth, n)| (depth, n.id.clone()))
        .collect();
    assert_eq!(prefix[0], (0, "I0".to_string()));
    for g in 1..=GENERATIONS {
        assert_eq!(prefix[g], (g, format!("A{g}")));
    }
    assert_eq!(prefix[GENERATIONS + 1], (GENERATIONS, format!("B{GENERATIONS}")));
    assert_eq!(prefix[GENERATIONS + 2], (GENERATIONS - 1, format!("B{}", GENERATIONS - 1)));
}

#[test]
fn test_very_long_line_of_descent() {
    // I{i} is the only child of father I{i+1}
    const GENERATIONS: usize = 100_000;
    let mut gedcom = String::new();
    for i in 0..GENERATIONS {
        let _ = writeln!(gedcom, "0 @I{i}@ INDI\n1 FAMC @F{i}@\n0 @F{i}@ FAM\n1 HUSB @I{}@", i + 1);
    }
    let _ = writeln!(gedcom, "0 @I{GENERATIONS}@ INDI");
    let records = records_of(&gedcom);

    let pedigree = records.pedigree("I0").unwrap();

    assert_eq!(pedigree.num_individuals(), GENERATIONS + 1);
    assert_eq!(pedigree.max_depth(), GENERATIONS);
    assert_eq!(pedigree.iter().count(), GENERATIONS + 1);

    let (depth, oldest) = pedigree.iter().last().unwrap();
    assert_eq!(depth, GENERATIONS);
    assert_eq!(oldest.id, format!("I{GENERATIONS}"));
    assert!(oldest.is_leaf());
    assert!(pedigree.mother_of(pedigree.root()).is_none());
}

#[test]
fn test_very_long_cycle_is_detected() {
    // The oldest generation closes the loop back to I0
    const GENERATIONS: usize = 100_000;
    let mut gedcom = String::new();
    for i in 0..GENERATIONS {
        let parent = (i + 1) % GENERATIONS;
        let _ = writeln!(gedcom, "0 @I{i}@ INDI\n1 FAMC @F{i}@\n0 @F{i}@ FAM\n1 WIFE @I{parent}@");
    }
    let records = records_of(&gedcom);

    let err = records.pedigree("I0").unwrap_err();
    let PedigreeError::CyclicAncestry { id, path } = &err else {
        panic!("expected cyclic ancestry, got {err:?}");
    };
    assert_eq!(id, "I0");
    assert_eq!(path.len(), GENERATIONS + 1);
    assert_eq!(path.first(), path.last());
}

#[test]
fn test_missing_parent_is_left_out() {
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n\
         0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I99@",
    );
    let pedigree = records.pedigree("I1").unwrap();

    assert_eq!(pedigree.father_of(pedigree.root()).unwrap().id, "I2");
    assert!(pedigree.root().mother.is_none());
    assert_eq!(pedigree.num_individuals(), 2);
}

#[test]
fn test_missing_family_ends_pedigree() {
    let records = records_of("0 @I1@ INDI\n1 FAMC @F9@");
    let pedigree = records.pedigree("I1").unwrap();

    assert!(pedigree.root().is_leaf());
}

#[test]
fn test_family_without_spouses_ends_pedigree() {
    let records = records_of("0 @I1@ INDI\n1 FAMC @F1@\n0 @F1@ FAM\n1 CHIL @I1@");
    let pedigree = records.pedigree("I1").unwrap();

    assert!(pedigree.root().is_leaf());
}

// --- TESTS ERRORS ---
#[test]
fn test_unknown_individual() {
    let records = records_of("0 @I1@ INDI");

    let err = records.pedigree("I42").unwrap_err();
    assert_eq!(err, PedigreeError::UnknownIndividual("I42".to_string()));
    assert_eq!(err.to_string(), "Unknown individual I42");
}

#[test]
fn test_own_parent_is_cyclic() {
    let records = records_of("0 @A@ INDI\n1 FAMC @F1@\n0 @F1@ FAM\n1 HUSB @A@");

    let err = records.pedigree("A").unwrap_err();
    assert_eq!(
        err,
        PedigreeError::CyclicAncestry {
            id: "A".to_string(),
            path: vec!["A".to_string(), "A".to_string()],
        }
    );
}

#[test]
fn test_longer_cycle_reports_path() {
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n1 FAMC @F2@\n\
         0 @F1@ FAM\n1 WIFE @I2@\n\
         0 @F2@ FAM\n1 HUSB @I1@",
    );

    let err = records.pedigree("I1").unwrap_err();
    let PedigreeError::CyclicAncestry { id, path } = &err else {
        panic!("expected cyclic ancestry, got {err:?}");
    };
    assert_eq!(id, "I1");
    assert_eq!(path, &["I1", "I2", "I1"]);
    assert_eq!(
        err.to_string(),
        "Cyclic ancestry - I1 is their own ancestor (via I1 -> I2 -> I1)"
    );
}

#[test]
fn test_cycle_above_start_is_detected() {
    // I1 itself is not on the cycle, but its parent I2 is
    let records = records_of(
        "0 @I1@ INDI\n1 FAMC @F1@\n\
         0 @I2@ INDI\n1 FAMC @F2@\n\
         0 @F1@ FAM\n1 HUSB @I2@\n\
         0 @F2@ FAM\n1 WIFE @I2@",
    );

    let err = records.pedigree("I1").unwrap_err();
    assert!(matches!(err, PedigreeError::CyclicAncestry { ref id, .. } if id == "I2"));
}
