//! Source location tracking
//!
//! Offsets are byte offsets into the tokenized text. Lines and columns are
//! 1-based and count characters, matching what editors report to the user.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The starting position (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position over a string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }

    /// Re-base a position measured from `Position::start()` onto `origin`
    pub fn relative_to(self, origin: Position) -> Self {
        Self {
            offset: origin.offset + self.offset,
            line: origin.line + self.line - 1,
            column: if self.line == 1 {
                origin.column + self.column - 1
            } else {
                self.column
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };

        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }

    /// Re-base both ends onto `origin`
    pub fn relative_to(self, origin: Position) -> Self {
        Self {
            start: self.start.relative_to(origin),
            end: self.end.relative_to(origin),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    /// Text covered by this span
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance() {
        let pos = Position::start();
        let pos = pos.advance('a');
        assert_eq!(pos, Position::new(1, 1, 2));

        let pos = pos.advance('\n');
        assert_eq!(pos, Position::new(2, 2, 1));

        let pos = pos.advance('é');
        assert_eq!(pos, Position::new(4, 2, 2));
    }

    #[test]
    fn test_advance_str_counts_lines() {
        let pos = Position::start().advance_str("SELECT\r\n  1");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 4);
        assert_eq!(pos.offset, 11);
    }

    #[test]
    fn test_relative_to() {
        let origin = Position::new(20, 3, 1);
        let local = Position::new(4, 1, 5);
        assert_eq!(local.relative_to(origin), Position::new(24, 3, 5));

        let nested = Position::new(10, 2, 3);
        assert_eq!(nested.relative_to(origin), Position::new(30, 4, 3));
    }

    #[test]
    fn test_span_slice_and_merge() {
        let text = "SELECT 1";
        let a = Span::new(Position::start(), Position::new(6, 1, 7));
        let b = Span::new(Position::new(7, 1, 8), Position::new(8, 1, 9));

        assert_eq!(a.slice(text), "SELECT");
        assert_eq!(a.merge(b).slice(text), text);
        assert_eq!(b.merge(a), a.merge(b));
        assert!(a.contains_offset(5));
        assert!(!a.contains_offset(6));
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::new(0, 1, 1), Position::new(6, 1, 7));
        assert_eq!(span.to_string(), "1:1-7");
    }
}
