//! Offset to line/column translation.
//!
//! The scanner appends one entry per physical line while it walks the source. Once scanning is finished the map is
//! frozen and used to turn the offset-based [`Region`](crate::source::Region)s of diagnostics into line/column
//! positions.

use crate::source::Offset;

/// 1-based line number.
pub type LineIndex = usize;

/// One physical line of a source unit.
///
/// ## Notes
/// - `length` counts the bytes from `offset` up to, but excluding, the line feed.
/// - `text` never contains the line feed or a carriage return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub index: LineIndex,
    pub offset: Offset,
    pub length: usize,
    pub text: String,
}

/// A resolved position: the line an offset falls on and the 0-based column inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: Offset,
    pub line: Line,
    pub column: usize,
}

/// Append-only collector filled by the scanner.
#[derive(Debug, Clone, Default)]
pub struct LineMapBuilder {
    lines: Vec<Line>,
}

impl LineMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>, offset: Offset, length: usize) {
        let index = self.lines.len() + 1;
        self.lines.push(Line {
            index,
            offset,
            length,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build(self) -> LineMap {
        LineMap { lines: self.lines }
    }

    /// Frozen copy of the lines appended so far.
    pub fn snapshot(&self) -> LineMap {
        LineMap {
            lines: self.lines.clone(),
        }
    }
}

/// Frozen per-line table of a source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap {
    lines: Vec<Line>,
}

impl LineMap {
    /// Line containing `offset`.
    ///
    /// ## Notes
    /// - Offsets past the last line (including the end-of-input offset) map to the last line.
    /// - An empty map reports line 1.
    pub fn line_at_offset(&self, offset: Offset) -> LineIndex {
        let following = self.lines.partition_point(|line| line.offset <= offset);
        following.max(1)
    }

    /// Line with the 1-based `index`, if it exists.
    pub fn line(&self, index: LineIndex) -> Option<&Line> {
        index.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Resolve `offset` to its line and column.
    pub fn position_at_offset(&self, offset: Offset) -> Position {
        let index = self.line_at_offset(offset);
        let line = self.line(index).cloned().unwrap_or(Line {
            index,
            ..Line::default()
        });
        Position {
            offset,
            column: offset.saturating_sub(line.offset),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_lines() -> LineMap {
        // "ab\n\ncdef"
        let mut builder = LineMapBuilder::new();
        builder.append("ab", 0, 2);
        builder.append("", 3, 0);
        builder.append("cdef", 4, 4);
        builder.build()
    }

    #[test]
    fn test_line_at_offset_binary_search() {
        let map = three_lines();
        assert_eq!(map.line_at_offset(0), 1);
        assert_eq!(map.line_at_offset(2), 1);
        assert_eq!(map.line_at_offset(3), 2);
        assert_eq!(map.line_at_offset(4), 3);
        assert_eq!(map.line_at_offset(7), 3);
        assert_eq!(map.line_at_offset(100), 3);
    }

    #[test]
    fn test_position_column() {
        let map = three_lines();
        let position = map.position_at_offset(6);
        assert_eq!(position.line.index, 3);
        assert_eq!(position.line.text, "cdef");
        assert_eq!(position.column, 2);
    }

    #[test]
    fn test_empty_map() {
        let map = LineMap::default();
        assert_eq!(map.line_at_offset(10), 1);
        let position = map.position_at_offset(10);
        assert_eq!(position.line.index, 1);
        assert_eq!(position.column, 10);
        assert!(map.line(0).is_none());
    }
}
