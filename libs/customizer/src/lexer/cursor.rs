//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("radius");
//! assert_eq!(cursor.peek(), Some('r'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('a'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// Steps through the source one `char` at a time; columns count characters,
/// bytes count UTF-8 bytes.
///
/// ## Example
///
/// ```rust
/// # use openscad_customizer::lexer::Cursor;
/// let mut cursor = Cursor::new("base");
/// assert_eq!(cursor.advance(), Some('b'));
/// assert_eq!(cursor.position().byte, 1);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    ///
    /// ## Parameters
    ///
    /// - `source`: Model source to scan
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use openscad_customizer::lexer::Cursor;
    /// let cursor = Cursor::new("radius = 90;");
    /// assert!(!cursor.is_eof());
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Get current position.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use openscad_customizer::lexer::Cursor;
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// let pos = cursor.position();
    /// assert_eq!((pos.byte, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of file.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Peek at the character after the current one.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use openscad_customizer::lexer::Cursor;
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_next(), Some('*'));
    /// ```
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.byte..].chars();
        chars.next();
        chars.next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use openscad_customizer::lexer::Cursor;
    /// let mut cursor = Cursor::new("152:medium");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.peek(), Some(':'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between a start position and the current position.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use openscad_customizer::lexer::Cursor;
    /// let mut cursor = Cursor::new("left_curve = true;");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_alphanumeric() || c == '_');
    /// assert_eq!(cursor.slice_from(start), "left_curve");
    /// ```
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.byte..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
