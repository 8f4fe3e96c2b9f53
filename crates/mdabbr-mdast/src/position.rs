//! Source positions in characters, plus a byte offset to point index.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One place in the source. `line` and `column` are 1-based, `offset` is
/// 0-based; all three count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The point `delta` characters further along the same line.
    pub fn shifted(self, delta: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + delta,
            offset: self.offset + delta,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Maps byte offsets of a text to [`Point`]s.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of every line start.
    line_starts: Vec<usize>,
    /// Character offset of every line start.
    line_char_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut line_char_starts = vec![0];
        for (chars, (bytes, ch)) in text.char_indices().enumerate() {
            if ch == '\n' {
                line_starts.push(bytes + 1);
                line_char_starts.push(chars + 1);
            }
        }
        Self {
            text,
            line_starts,
            line_char_starts,
        }
    }

    /// The point at byte `offset`, which must be on a char boundary.
    pub fn point(&self, offset: usize) -> Point {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = self.text[self.line_starts[line]..offset].chars().count();
        Point {
            line: line + 1,
            column: column + 1,
            offset: self.line_char_starts[line] + column,
        }
    }

    pub fn position(&self, start: usize, end: usize) -> Position {
        Position::new(self.point(start), self.point(end))
    }
}
