use gedwick::parser::line_tokenizer::{as_pointer, strip_pointer, tokenize_line};
use rstest::rstest;

// --- TESTS VALID LINES ---
#[rstest]
#[case("0 HEAD", 0, None, "HEAD", "")]
#[case("0 @I1@ INDI", 0, Some("I1"), "INDI", "")]
#[case("1 NAME John /Doe/", 1, None, "NAME", "John /Doe/")]
#[case("1 HUSB @I1@", 1, None, "HUSB", "@I1@")]
#[case("0 @N1@ NOTE First line", 0, Some("N1"), "NOTE", "First line")]
#[case("2 DATE 1 JAN 1900", 2, None, "DATE", "1 JAN 1900")]
#[case("12 _CUSTOM x", 12, None, "_CUSTOM", "x")]
#[case("   1   SEX   M   ", 1, None, "SEX", "M")]
#[case("1\tPLAC\tBerlin", 1, None, "PLAC", "Berlin")]
#[case("0 TRLR\r", 0, None, "TRLR", "")]
#[case("\u{feff}0 HEAD", 0, None, "HEAD", "")]
fn test_tokenize_valid_line(
    #[case] line: &str,
    #[case] level: u32,
    #[case] xref: Option<&str>,
    #[case] tag: &str,
    #[case] value: &str,
) {
    let tokenized = tokenize_line(line).unwrap();
    assert_eq!(tokenized.level, level);
    assert_eq!(tokenized.xref, xref);
    assert_eq!(tokenized.tag, tag);
    assert_eq!(tokenized.value, value);
}

#[test]
fn test_value_keeps_inner_whitespace() {
    let tokenized = tokenize_line("1 NAME  John   /Doe/  ").unwrap();
    assert_eq!(tokenized.value, "John   /Doe/");
}

#[test]
fn test_value_may_contain_delimiters() {
    let tokenized = tokenize_line("1 EMAIL someone@@example.org").unwrap();
    assert_eq!(tokenized.tag, "EMAIL");
    assert_eq!(tokenized.value, "someone@@example.org");
}

// --- TESTS MALFORMED LINES ---
#[rstest]
#[case::empty("")]
#[case::blank("    ")]
#[case::no_level("NAME John")]
#[case::negative_level("-1 NAME John")]
#[case::level_only("0")]
#[case::level_and_xref_only("0 @I1@")]
#[case::level_and_xref_with_spaces("0 @I1@    ")]
#[case::fractional_level("1.5 NAME John")]
fn test_tokenize_malformed_line(#[case] line: &str) {
    assert!(tokenize_line(line).is_none());
}

// --- TESTS POINTERS ---
#[rstest]
#[case("@I1@", Some("I1"))]
#[case("@F23@", Some("F23"))]
#[case("I1", None)]
#[case("@I1", None)]
#[case("I1@", None)]
#[case("@", None)]
#[case("@@", None)]
#[case("", None)]
fn test_as_pointer(#[case] field: &str, #[case] expected: Option<&str>) {
    assert_eq!(as_pointer(field), expected);
}

#[test]
fn test_strip_pointer() {
    assert_eq!(strip_pointer("@I1@"), "I1");
    assert_eq!(strip_pointer("I1"), "I1");
    assert_eq!(strip_pointer("inline text"), "inline text");
}

#[test]
fn test_empty_delimiters_are_not_an_xref() {
    // "@@" is not a pointer, so it is read as the tag
    let tokenized = tokenize_line("0 @@ INDI").unwrap();
    assert_eq!(tokenized.xref, None);
    assert_eq!(tokenized.tag, "@@");
    assert_eq!(tokenized.value, "INDI");
}
