use gedwick::gedcom::{GedcomParserBuilder, ReadStrategy, subtree_to_gedcom, to_gedcom, write_gedcom_file};
use gedwick::parser::ParsingError;
use gedwick::records::ContinuationStyle;
use gedwick::{parse_gedcom_file, parse_gedcom_str};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const GEDCOM: &str = "\
0 HEAD
1 CHAR UTF-8
0 @I1@ INDI
1 NAME John /Doe/
1 FAMC @F1@
0 @I2@ INDI
1 NAME Richard /Doe/
0 @F1@ FAM
1 HUSB @I2@
1 CHIL @I1@
0 @N1@ NOTE Hel
1 CONC lo
0 TRLR
";

fn write_temp(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("family.ged");
    fs::write(&path, contents).unwrap();
    path
}

// --- TESTS PARSER BUILDER ---
#[test]
fn test_read_strategies_agree() {
    let dir = tempdir().unwrap();
    let path = write_temp(&dir, GEDCOM);

    let buffered = GedcomParserBuilder::for_file(&path).with_buffered_source().build().unwrap();
    let in_memory = GedcomParserBuilder::for_file(&path).with_in_memory_source().build().unwrap();
    let automatic = GedcomParserBuilder::for_file(&path).build().unwrap();

    assert_eq!(buffered.document(), in_memory.document());
    assert_eq!(buffered.document(), automatic.document());
    assert_eq!(buffered.num_nodes(), 13);
    assert_eq!(buffered.num_skipped_lines(), 0);
}

#[test]
fn test_file_and_string_input_agree() {
    let dir = tempdir().unwrap();
    let path = write_temp(&dir, GEDCOM);

    let from_file = GedcomParserBuilder::for_file(&path).build().unwrap();
    let from_str = GedcomParserBuilder::for_str(GEDCOM).build().unwrap();

    assert_eq!(from_file.document(), from_str.document());
    assert_eq!(from_str.into_document(), parse_gedcom_str(GEDCOM));
}

#[test]
fn test_continuation_style_is_applied() {
    let parser = GedcomParserBuilder::for_str(GEDCOM).build().unwrap();
    assert_eq!(parser.continuation_style(), ContinuationStyle::Newline);
    assert_eq!(parser.records().notes["N1"], "Hel\nlo");

    let parser = GedcomParserBuilder::for_str(GEDCOM)
        .with_continuation_style(ContinuationStyle::Gedcom)
        .build()
        .unwrap();
    assert_eq!(parser.records().notes["N1"], "Hello");
}

#[test]
fn test_default_read_strategy() {
    assert_eq!(ReadStrategy::default(), ReadStrategy::Automatic);
}

#[test]
fn test_crlf_file() {
    let dir = tempdir().unwrap();
    let path = write_temp(&dir, &GEDCOM.replace('\n', "\r\n"));

    let buffered = GedcomParserBuilder::for_file(&path).with_buffered_source().build().unwrap();
    assert_eq!(buffered.document(), &parse_gedcom_str(GEDCOM));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ged");

    for builder in [
        GedcomParserBuilder::for_file(&path),
        GedcomParserBuilder::for_file(&path).with_buffered_source(),
    ] {
        let err = builder.build().unwrap_err();
        match &err {
            ParsingError::Open { path: failed, .. } => assert_eq!(failed, &path),
            other => panic!("expected open error, got {other:?}"),
        }
        assert_eq!(err.line(), None);
    }
}

// --- TESTS QUICK API ---
#[test]
fn test_parse_gedcom_file() {
    let dir = tempdir().unwrap();
    let path = write_temp(&dir, GEDCOM);

    let records = parse_gedcom_file(&path).unwrap();
    assert_eq!(records.individuals.len(), 2);
    assert_eq!(records.families["F1"].husband_id, "I2");

    let pedigree = records.pedigree("I1").unwrap();
    assert_eq!(pedigree.num_individuals(), 2);
}

#[test]
fn test_parse_gedcom_file_missing() {
    let result = parse_gedcom_file(Path::new("does/not/exist.ged"));
    assert!(matches!(result, Err(ParsingError::Open { .. })));
}

// --- TESTS WRITER ---
#[test]
fn test_to_gedcom_normalizes_whitespace() {
    let document = parse_gedcom_str("0   @I1@  INDI\n1  NAME   John  /Doe/  \n\nbad\n0 TRLR");

    assert_eq!(to_gedcom(document.forest()), "0 @I1@ INDI\n1 NAME John  /Doe/\n0 TRLR\n");
}

#[test]
fn test_subtree_to_gedcom() {
    let document = parse_gedcom_str(GEDCOM);
    let family = document.xrefs().get("F1").unwrap();

    assert_eq!(subtree_to_gedcom(document.forest(), family), "0 @F1@ FAM\n1 HUSB @I2@\n1 CHIL @I1@\n");
}

#[test]
fn test_write_gedcom_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.ged");
    let document = parse_gedcom_str(GEDCOM);

    write_gedcom_file(&path, document.forest()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, GEDCOM);
    let reparsed = GedcomParserBuilder::for_file(&path).build().unwrap();
    assert_eq!(reparsed.document(), &document);
}
