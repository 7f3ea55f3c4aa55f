//! Zero-based line/column positions and half-open ranges.

use std::fmt;

/// A zero-based line and column position.
///
/// Columns are counted in UTF-16 code units. Positions are ordered by line,
/// then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column, in UTF-16 code units.
    pub column: u32,
}

impl Position {
    /// The first character of a document.
    pub const ZERO: Position = Position { line: 0, column: 0 };

    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if `start <= position < exclusive_end`.
    #[inline]
    pub fn is_between(start: Position, position: Position, exclusive_end: Position) -> bool {
        start <= position && position < exclusive_end
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of positions `[start, exclusive_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// The first position in the range.
    pub start: Position,
    /// The first position after the range.
    pub exclusive_end: Position,
}

impl Range {
    /// Creates a new range.
    ///
    /// `start` must not come after `exclusive_end`.
    #[inline]
    pub fn new(start: Position, exclusive_end: Position) -> Self {
        debug_assert!(
            start <= exclusive_end,
            "range start {start} is after its end {exclusive_end}"
        );
        Self {
            start,
            exclusive_end,
        }
    }

    /// Creates a zero-width range anchored at `position`.
    #[inline]
    pub fn at(position: Position) -> Self {
        Self {
            start: position,
            exclusive_end: position,
        }
    }

    /// Returns true if this range covers no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.exclusive_end
    }

    /// Returns true if this range contains the given position.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        Position::is_between(self.start, position, self.exclusive_end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.exclusive_end)
    }
}
