//! Structs and logic to parse GEDCOM files.
//!
//! This module provides the [GedcomParserBuilder] and [GedcomParser] structs,
//! which offer methods to parse GEDCOM input with different configurations.

use crate::model::{ForestBuilder, GedcomDocument};
use crate::parser::line_source::{BufferedLineSource, InMemoryLineSource, LineSource};
use crate::parser::parsing_error::ParsingError;
use crate::records::{ContinuationStyle, RecordSet};
use std::path::{Path, PathBuf};
use tracing::debug;

// =#========================================================================#=
// READ STRATEGY
// =#========================================================================#=
/// Controls how a file is read during parsing.
///
/// By default, the [GedcomParserBuilder] uses [ReadStrategy::Automatic],
/// which picks a strategy based on file size. Use
/// [with_buffered_source()](GedcomParserBuilder::with_buffered_source) or
/// [with_in_memory_source()](GedcomParserBuilder::with_in_memory_source)
/// to override this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrategy {
    /// Read the file line by line through a buffered I/O reader.
    Buffered,

    /// Load the entire file into memory before parsing.
    InMemory,

    /// Automatically choose between [ReadStrategy::Buffered] and
    /// [ReadStrategy::InMemory] based on file size.
    /// This is the default.
    #[default]
    Automatic,
}

/// Where the builder takes its input from.
#[derive(Debug, Clone)]
enum Input {
    File(PathBuf),
    Text(String),
}

// =#========================================================================#=
// GEDCOM PARSER BUILDER
// =#========================================================================$=
/// Builder for configuring and creating a [GedcomParser].
///
/// # Configuration Options
/// * **Continuation style**: how `CONT`/`CONC` lines extend note text
///   - [`with_continuation_style()`](Self::with_continuation_style),
///     default is [ContinuationStyle::Newline]
///
/// * **Read strategy** (files only):
///   - [`with_buffered_source()`](Self::with_buffered_source)
///     to stream the file line by line
///   - [`with_in_memory_source()`](Self::with_in_memory_source)
///     to read the whole file upfront
///
/// # Example
/// ```no_run
/// use gedwick::gedcom::GedcomParserBuilder;
/// use gedwick::records::ContinuationStyle;
///
/// let parser = GedcomParserBuilder::for_file("royal92.ged")
///     .with_continuation_style(ContinuationStyle::Gedcom)
///     .build()?;
///
/// let records = parser.records();
/// println!("Loaded {} individuals", records.individuals.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GedcomParserBuilder {
    input: Input,
    read_strategy: ReadStrategy,
    continuation_style: ContinuationStyle,
}

// ============================================================================
// Building (pub)
// ============================================================================
impl GedcomParserBuilder {
    /// Creates a new builder reading from a file.
    ///
    /// The file is only opened by [`build()`](Self::build).
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    pub fn for_file<P: AsRef<Path>>(path: P) -> Self {
        Self::with_input(Input::File(path.as_ref().to_path_buf()))
    }

    /// Creates a new builder parsing GEDCOM text held in memory.
    pub fn for_str<S: Into<String>>(text: S) -> Self {
        Self::with_input(Input::Text(text.into()))
    }

    fn with_input(input: Input) -> Self {
        GedcomParserBuilder {
            input,
            read_strategy: ReadStrategy::default(),
            continuation_style: ContinuationStyle::default(),
        }
    }

    /// Sets how continuation lines extend note text.
    pub fn with_continuation_style(mut self, style: ContinuationStyle) -> Self {
        self.continuation_style = style;
        self
    }

    /// Configures the parser to stream the file through a buffered reader.
    ///
    /// Has no effect for [`for_str()`](Self::for_str) input.
    pub fn with_buffered_source(mut self) -> Self {
        self.read_strategy = ReadStrategy::Buffered;
        self
    }

    /// Configures the parser to read the whole file into memory first.
    ///
    /// Has no effect for [`for_str()`](Self::for_str) input.
    pub fn with_in_memory_source(mut self) -> Self {
        self.read_strategy = ReadStrategy::InMemory;
        self
    }

    /// Reads the input and builds the node forest and cross-reference index.
    ///
    /// Malformed lines are skipped; their number is available through
    /// [GedcomParser::num_skipped_lines].
    ///
    /// # Errors
    /// Returns a [ParsingError] if the file cannot be opened or read.
    pub fn build(self) -> Result<GedcomParser, ParsingError> {
        /// File size threshold (in bytes) for automatic read strategy.
        /// Files smaller than this are read into memory; larger files use buffered I/O.
        const AUTO_IN_MEMORY_THRESHOLD: u64 = 64 * 1024 * 1024; // 64 MB

        let document = match self.input {
            Input::Text(text) => parse_source(&mut InMemoryLineSource::from_string(text))?,
            Input::File(path) => {
                let use_buffered = match self.read_strategy {
                    ReadStrategy::Buffered => true,
                    ReadStrategy::InMemory => false,
                    ReadStrategy::Automatic => {
                        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                        file_size >= AUTO_IN_MEMORY_THRESHOLD
                    }
                };
                debug!(path = %path.display(), use_buffered, "reading GEDCOM file");

                if use_buffered {
                    let mut source = BufferedLineSource::from_file(&path)
                        .map_err(|err| ParsingError::open(&path, err))?;
                    parse_source(&mut source)?
                } else {
                    let mut source = InMemoryLineSource::from_file(&path)
                        .map_err(|err| ParsingError::open(&path, err))?;
                    parse_source(&mut source)?
                }
            }
        };

        Ok(GedcomParser {
            document,
            continuation_style: self.continuation_style,
        })
    }
}

/// Feeds all lines of `source` through a fresh [ForestBuilder].
pub(crate) fn parse_source<S: LineSource>(source: &mut S) -> Result<GedcomDocument, ParsingError> {
    let mut builder = ForestBuilder::new();
    builder.push_source(source)?;
    Ok(builder.finish())
}

// =#========================================================================#=
// GEDCOM PARSER
// =#========================================================================#=
/// A parsed GEDCOM input, ready for record extraction.
///
/// Created by [GedcomParserBuilder::build].
#[derive(Debug, Clone)]
pub struct GedcomParser {
    document: GedcomDocument,
    continuation_style: ContinuationStyle,
}

impl GedcomParser {
    /// Returns the parsed document (forest and cross-reference index).
    pub fn document(&self) -> &GedcomDocument {
        &self.document
    }

    /// Returns the number of nodes in the forest.
    pub fn num_nodes(&self) -> usize {
        self.document.forest().num_nodes()
    }

    /// Returns the number of input lines skipped as malformed.
    pub fn num_skipped_lines(&self) -> usize {
        self.document.num_skipped_lines()
    }

    /// Returns the configured continuation style.
    pub fn continuation_style(&self) -> ContinuationStyle {
        self.continuation_style
    }

    /// Extracts all typed records with the configured continuation style.
    pub fn records(&self) -> RecordSet {
        RecordSet::from_document_with_style(&self.document, self.continuation_style)
    }

    /// Consumes the parser, returning the document.
    pub fn into_document(self) -> GedcomDocument {
        self.document
    }
}
