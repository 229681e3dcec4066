//! Source positions and character readers.
//!
//! The scanner never touches a `&str` directly: it consumes a [`CharReader`], which hands out one character at a
//! time with one character of lookahead. [`StringReader`] is the in-memory implementation used by the CLI and the
//! tests.

use std::path::Path;

/// Byte offset into a source unit.
pub type Offset = usize;

/// Half-open `[begin, end)` byte range into a source unit.
///
/// ## Notes
/// - `begin <= end` always holds; [`Region::new`] swaps reversed bounds.
/// - Empty regions (`begin == end`) mark synthetic tokens and implicit nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub begin: Offset,
    pub end: Offset,
}

impl Region {
    /// Region of unknown origin, used when no better position can be computed.
    pub const UNKNOWN: Region = Region { begin: 0, end: 0 };

    pub fn new(begin: Offset, end: Offset) -> Self {
        if begin <= end {
            Self { begin, end }
        } else {
            Self { begin: end, end: begin }
        }
    }

    /// Empty region located at `offset`.
    pub fn empty_at(offset: Offset) -> Self {
        Self {
            begin: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Smallest region covering both `self` and `other`.
    pub fn merge(self, other: Region) -> Region {
        Region {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }

    pub fn contains(&self, offset: Offset) -> bool {
        offset >= self.begin && offset < self.end
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

impl From<Region> for miette::SourceSpan {
    fn from(region: Region) -> Self {
        miette::SourceSpan::new(region.begin.into(), region.len())
    }
}

/// Character returned by readers once the input is exhausted.
pub const END_OF_INPUT: char = '\0';

/// One-character-lookahead character source consumed by the scanner.
///
/// ## Notes
/// - [`CharReader::index`] is the byte offset of the next character [`CharReader::pull`] would return. Before the
///   first pull it is `0`; once exhausted it equals the source length.
/// - Every operation returns [`END_OF_INPUT`] instead of failing when nothing is left.
pub trait CharReader {
    /// Consume the next character and make it the current one.
    fn pull(&mut self) -> char;

    /// Return the next character without consuming it.
    fn peek(&self) -> char;

    /// Return the most recently pulled character.
    fn current(&self) -> char;

    /// Byte offset of the next unread character.
    fn index(&self) -> Offset;

    /// Consume `count` characters.
    fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.pull();
        }
    }

    fn is_exhausted(&self) -> bool;
}

/// In-memory [`CharReader`] over an owned string.
#[derive(Debug, Clone)]
pub struct StringReader {
    text: String,
    index: Offset,
    current: char,
}

impl StringReader {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index: 0,
            current: END_OF_INPUT,
        }
    }

    /// Read a whole file into a reader.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(Self::new)
    }
}

impl CharReader for StringReader {
    fn pull(&mut self) -> char {
        match self.text[self.index..].chars().next() {
            Some(c) => {
                self.index += c.len_utf8();
                self.current = c;
                c
            }
            None => {
                self.current = END_OF_INPUT;
                END_OF_INPUT
            }
        }
    }

    fn peek(&self) -> char {
        self.text[self.index..].chars().next().unwrap_or(END_OF_INPUT)
    }

    fn current(&self) -> char {
        self.current
    }

    fn index(&self) -> Offset {
        self.index
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_walks_characters() {
        let mut reader = StringReader::new("ab");
        assert_eq!(reader.peek(), 'a');
        assert_eq!(reader.current(), END_OF_INPUT);
        assert_eq!(reader.pull(), 'a');
        assert_eq!(reader.current(), 'a');
        assert_eq!(reader.index(), 1);
        assert_eq!(reader.pull(), 'b');
        assert!(reader.is_exhausted());
        assert_eq!(reader.pull(), END_OF_INPUT);
        assert_eq!(reader.peek(), END_OF_INPUT);
        assert_eq!(reader.index(), 2);
    }

    #[test]
    fn test_reader_skip_and_multibyte_offsets() {
        let mut reader = StringReader::new("ä=1");
        reader.skip(2);
        assert_eq!(reader.current(), '=');
        assert_eq!(reader.index(), 3);
        assert_eq!(reader.peek(), '1');
    }

    #[test]
    fn test_region_normalizes_and_merges() {
        let region = Region::new(7, 3);
        assert_eq!(region, Region { begin: 3, end: 7 });
        assert_eq!(region.len(), 4);
        assert!(region.contains(3));
        assert!(!region.contains(7));
        assert_eq!(region.merge(Region::new(9, 12)), Region::new(3, 12));
        assert!(Region::empty_at(5).is_empty());
    }
}
