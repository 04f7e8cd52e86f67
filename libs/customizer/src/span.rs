//! # Source Positions
//!
//! Byte, line and column tracking for tokens and parameters.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::{Position, Span};
//!
//! let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
//! assert_eq!(span.len(), 4);
//! ```

/// A single point in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

/// A half-open range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True when the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-indexed line of the span start, as shown to users.
    pub const fn line_number(&self) -> usize {
        self.start.line + 1
    }
}
