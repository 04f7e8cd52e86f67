//! # Tokens
//!
//! Token types for the customizer lexer. Unlike a full OpenSCAD lexer,
//! comments are tokens: parameter annotations and group headers live in them.

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text, verbatim from the source.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Line (0-indexed) on which the token starts.
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Body of a comment token without its delimiters, trimmed.
    ///
    /// Returns `None` for non-comment tokens.
    pub fn comment_body(&self) -> Option<&str> {
        match self.kind {
            TokenKind::LineComment => self.text.strip_prefix("//").map(str::trim),
            TokenKind::BlockComment => self
                .text
                .strip_prefix("/*")
                .and_then(|t| t.strip_suffix("*/"))
                .map(str::trim),
            _ => None,
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Number literal like `10` or `3.14`
    Number,
    /// String literal like `"male"`, quotes included
    String,
    /// Boolean true
    True,
    /// Boolean false
    False,
    /// Undef value
    Undef,

    // Identifiers
    /// Identifier like `radius`
    Identifier,
    /// Special variable like `$fn`
    SpecialVariable,

    // Keywords
    /// `module` keyword
    Module,
    /// `function` keyword
    Function,
    /// Any other reserved word (`if`, `for`, `include`, ...)
    Keyword,

    // Punctuation
    /// `=`
    Eq,
    /// `-`
    Minus,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// Any other operator or punctuation
    Punct,

    // Trivia
    /// `// ...` up to end of line
    LineComment,
    /// `/* ... */`
    BlockComment,

    // Meta
    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if this is a literal token.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::True | Self::False | Self::Undef
        )
    }

    /// Check if this is a comment token.
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::True => "true",
            Self::False => "false",
            Self::Undef => "undef",
            Self::Identifier => "identifier",
            Self::SpecialVariable => "special variable",
            Self::Module => "module",
            Self::Function => "function",
            Self::Keyword => "keyword",
            Self::Eq => "=",
            Self::Minus => "-",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Punct => "operator",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Eof => "end of file",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
