//! Tokenizer for single GEDCOM lines.
//!
//! Every GEDCOM line has the shape `<level> [<xref>] <tag> [<value>]`,
//! e.g. `0 @I1@ INDI` or `1 NAME John /Doe/`. The [tokenize_line] function
//! splits one such line into a [TokenizedLine] borrowing from the input.
//! Lines that do not fit this shape are rejected with `None`; callers skip them.

/// Nesting level of a GEDCOM line (leading integer).
pub type Level = u32;

/// Delimiter enclosing cross-reference identifiers, as in `@I1@`.
pub const XREF_DELIMITER: char = '@';

/// Byte-order mark some genealogy tools write at the start of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

// =#========================================================================#=
// TOKENIZED LINE
// =#========================================================================#=
/// One parsed GEDCOM line, borrowing its parts from the raw input.
///
/// The `xref` is stored without its delimiters, so `@I1@` becomes `I1`.
/// The `value` has leading and trailing whitespace removed but keeps
/// whitespace inside it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// Nesting depth
    pub level: Level,
    /// Declared cross-reference id, if any (without delimiters)
    pub xref: Option<&'a str>,
    /// Tag such as `INDI`, `NAME` or `CONT`
    pub tag: &'a str,
    /// Remainder of the line, possibly empty
    pub value: &'a str,
}

// =#========================================================================#=
// TOKENIZING
// =#========================================================================#=
/// Tokenizes one raw GEDCOM line.
///
/// # Arguments
/// * `line` - The raw line, with or without trailing line break
///
/// # Returns
/// * `Some(TokenizedLine)` - If the line has a level and a tag
/// * `None` - For blank lines, lines whose first field is not a non-negative
///   integer, and lines with nothing (or only an xref) after the level
///
/// # Example
/// ```
/// use gedwick::parser::line_tokenizer::tokenize_line;
///
/// let line = tokenize_line("0 @I1@ INDI").unwrap();
/// assert_eq!(line.level, 0);
/// assert_eq!(line.xref, Some("I1"));
/// assert_eq!(line.tag, "INDI");
/// assert_eq!(line.value, "");
///
/// assert!(tokenize_line("NAME John").is_none());
/// ```
pub fn tokenize_line(line: &str) -> Option<TokenizedLine<'_>> {
    let rest = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);

    let (level_field, rest) = next_field(rest)?;
    let level = level_field.parse::<Level>().ok()?;

    let (second_field, rest) = next_field(rest)?;
    let (xref, tag, rest) = match as_pointer(second_field) {
        Some(xref) => {
            let (tag, rest) = next_field(rest)?;
            (Some(xref), tag, rest)
        }
        None => (None, second_field, rest),
    };

    Some(TokenizedLine {
        level,
        xref,
        tag,
        value: rest.trim(),
    })
}

/// Returns the identifier inside a delimited pointer such as `@F2@`.
///
/// At least one character is required between the delimiters;
/// `@`, `@@` and undelimited strings are not pointers.
///
/// # Example
/// ```
/// use gedwick::parser::line_tokenizer::as_pointer;
///
/// assert_eq!(as_pointer("@F2@"), Some("F2"));
/// assert_eq!(as_pointer("F2"), None);
/// assert_eq!(as_pointer("@@"), None);
/// ```
pub fn as_pointer(field: &str) -> Option<&str> {
    field
        .strip_prefix(XREF_DELIMITER)?
        .strip_suffix(XREF_DELIMITER)
        .filter(|inner| !inner.is_empty())
}

/// Strips pointer delimiters from a value if it is a pointer,
/// returns the value unchanged otherwise.
pub fn strip_pointer(value: &str) -> &str {
    as_pointer(value).unwrap_or(value)
}

/// Splits off the next whitespace-separated field.
///
/// Returns the field and the untouched remainder after it,
/// or `None` if only whitespace is left.
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }

    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}
