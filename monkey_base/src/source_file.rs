#![allow(clippy::future_not_send)]

//! Contains the code related to the source code input.

use std::{
    fmt::{Debug, Display},
    fs::File,
    iter::Peekable,
    ops::Range,
    path::PathBuf,
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a unit of Monkey source code: a file on disk or a line typed into the prompt.
#[derive(Getters)]
pub struct SourceFile {
    source: Source,

    /// Gets the name of the source: the file path, or a placeholder for in-memory sources.
    #[get = "pub"]
    name: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("lines", &self.lines)
            .finish()
    }
}

enum Source {
    Mapped(MappedSource),
    Memory(String),
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.borrow_mapped_str(),
            Self::Memory(string) => string,
        }
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // empty files cannot be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped.as_ref().map_or(Ok(""), |mapped| {
                    std::str::from_utf8(mapped).map_err(Error::from)
                })
            },
        }
        .try_build()
    }
}

impl SourceFile {
    fn new(name: PathBuf, source: Source) -> Arc<Self> {
        let lines = get_line_byte_positions(source.content());
        Arc::new(Self {
            source,
            name,
            lines,
        })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        self.lines
            .get(line.checked_sub(1)?)
            .map(|range| &self.content()[range.clone()])
    }

    /// Gets the byte index at which the given line starts.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<ByteIndex> {
        self.lines.get(line.checked_sub(1)?).map(|range| range.start)
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Gets the [`Iterator`] for the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_file: self,
            iterator: self.content().char_indices().peekable(),
        }
    }

    /// Loads the source file from the given file by mapping it into memory.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, Source::Mapped(source)))
    }

    /// Creates a source file that lives only in memory, such as a line read from the prompt.
    #[must_use]
    pub fn in_memory(name: impl Into<PathBuf>, content: impl Into<String>) -> Arc<Self> {
        Self::new(name.into(), Source::Memory(content.into()))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("monkey")
            .suffix(".mk")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The end of the content is located one column past the last character of the last line.
    /// Returns [`None`] if the index is not on a character boundary.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content().is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len() - 1);

        let line_start = self.lines[line].start;
        let column = self.content()[line_start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or splits a character.
    ///
    /// # Parameters
    /// - `start`: The start byte index of the span.
    /// - `end`: The end byte index of the span (exclusive).
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .expect("span starts on a character boundary")
    }
}

/// Is an iterator iterating over the characters in a source file that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the source file that the iterator is iterating over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator<'a> {
    /// Peeks at the next character in the source file.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.iterator.peek().copied() }
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, char) in text.char_indices() {
        if skip {
            skip = false;
            continue;
        }

        match char {
            '\n' => {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);
                current_position = byte + 1;
            }
            '\r' if text.as_bytes().get(byte + 1) == Some(&b'\n') => {
                results.push(current_position..byte + 2);
                current_position = byte + 2;
                skip = true;
            }
            '\r' => {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);
                current_position = byte + 1;
            }
            _ => {}
        }
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
