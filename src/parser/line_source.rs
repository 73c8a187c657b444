//! Line source abstractions for parsing.
//!
//! This module provides the [LineSource] trait and two implementations:
//! - [InMemoryLineSource] owns the whole text and hands out slices of it
//! - [BufferedLineSource] streams lines from any reader through a [BufReader]
//!
//! Both decode bytes as UTF-8 leniently: invalid sequences are replaced
//! instead of aborting the parse, since malformed content is skipped anyway.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

// =#========================================================================#=
// LINE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for sources of raw GEDCOM lines.
///
/// By using this trait, the same tree building logic works with small files
/// loaded entirely into memory and large files streamed from disk.
pub trait LineSource {
    /// Returns the next line without its line break.
    ///
    /// # Returns
    /// * `Ok(Some(&str))` - The next line
    /// * `Ok(None)` - If at end of data (EOF)
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    fn next_line(&mut self) -> io::Result<Option<&str>>;

    /// Returns the 1-based number of the line returned last,
    /// or 0 if no line has been read yet.
    fn line_number(&self) -> usize;
}

/// Removes a trailing `\n` or `\r\n`.
fn strip_line_break(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// =#========================================================================#=
// IN MEMORY LINE SOURCE
// =#========================================================================$=
/// An in-memory line source that owns its text.
///
/// This is the most efficient line source for files
/// that can fit entirely in memory.
pub struct InMemoryLineSource {
    /// The owned text being parsed
    input: String,
    /// Current byte position in the text
    pos: usize,
    /// Number of lines handed out so far
    line_number: usize,
}

impl InMemoryLineSource {
    /// Creates a new in-memory line source from a string.
    ///
    /// # Arguments
    /// * `text` - The GEDCOM text to parse
    pub fn from_string(text: String) -> Self {
        Self {
            input: text,
            pos: 0,
            line_number: 0,
        }
    }

    /// Reads an entire file into memory.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<InMemoryLineSource> {
        let mut contents = Vec::new();
        let mut file = File::open(path)?;
        file.read_to_end(&mut contents)?;
        let text = match String::from_utf8(contents) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        Ok(Self::from_string(text))
    }
}

impl LineSource for InMemoryLineSource {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let rest = &self.input[self.pos..];
        let end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        self.pos += end;
        self.line_number += 1;

        Ok(Some(strip_line_break(&rest[..end])))
    }

    #[inline]
    fn line_number(&self) -> usize {
        self.line_number
    }
}

// =#========================================================================#=
// BUFFERED LINE SOURCE
// =#========================================================================$=
/// A buffered line source for streaming large files.
///
/// Uses [BufReader] for efficient disk I/O and keeps one decoded line
/// at a time.
pub struct BufferedLineSource<R: Read = File> {
    /// Underlying reader, handles getting chunks from the file
    reader: BufReader<R>,
    /// Raw bytes of the current line
    raw: Vec<u8>,
    /// Decoded current line
    line: String,
    /// Number of lines handed out so far
    line_number: usize,
}

impl BufferedLineSource<File> {
    /// Creates a new buffered line source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<BufferedLineSource<File>> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> BufferedLineSource<R> {
    /// Default capacity reserved for a single line.
    ///
    /// GEDCOM limits lines to 255 characters, longer ones just reallocate.
    const LINE_CAPACITY: usize = 256;

    /// Creates a new buffered line source wrapping any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            raw: Vec::with_capacity(Self::LINE_CAPACITY),
            line: String::with_capacity(Self::LINE_CAPACITY),
            line_number: 0,
        }
    }
}

impl<R: Read> LineSource for BufferedLineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.raw.clear();
        if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.raw));

        Ok(Some(strip_line_break(&self.line)))
    }

    #[inline]
    fn line_number(&self) -> usize {
        self.line_number
    }
}
