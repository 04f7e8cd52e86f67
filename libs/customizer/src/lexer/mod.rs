//! # Customizer Lexer
//!
//! Tokenizes OpenSCAD source code, keeping comments as tokens.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("base = \"male\"; // [male, female]").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[4].kind, TokenKind::LineComment);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::CustomizerError;
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// OpenSCAD lexer converting source text into a stream of tokens.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens including a trailing EOF token.
    ///
    /// ## Errors
    ///
    /// Unterminated string literals and block comments.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CustomizerError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof_pos = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos), ""));

        Ok(self.tokens)
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), CustomizerError> {
        let start = self.cursor.position();

        if self.cursor.peek() == Some('/') {
            match self.cursor.peek_next() {
                Some('/') => {
                    self.scan_line_comment(start);
                    return Ok(());
                }
                Some('*') => return self.scan_block_comment(start),
                _ => {}
            }
        }

        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '-' => TokenKind::Minus,
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    TokenKind::Punct
                } else {
                    TokenKind::Eq
                }
            }
            '!' | '<' | '>' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                }
                TokenKind::Punct
            }
            '"' => return self.scan_string(start),
            '0'..='9' => {
                self.scan_number();
                TokenKind::Number
            }
            '.' if self.cursor.peek().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number();
                TokenKind::Number
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                self.cursor.advance_while(|c| c.is_alphanumeric() || c == '_');
                keyword(self.cursor.slice_from(start))
            }
            '$' => {
                self.cursor.advance_while(|c| c.is_alphanumeric() || c == '_');
                TokenKind::SpecialVariable
            }
            _ => TokenKind::Punct,
        };

        self.push(kind, start);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start);
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }

    /// Scan `// ...` up to (not including) the newline.
    fn scan_line_comment(&mut self, start: Position) {
        self.cursor.advance_while(|c| c != '\n');
        self.push(TokenKind::LineComment, start);
    }

    /// Scan `/* ... */`.
    fn scan_block_comment(&mut self, start: Position) -> Result<(), CustomizerError> {
        self.cursor.advance(); // /
        self.cursor.advance(); // *
        loop {
            match self.cursor.advance() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance();
                    self.push(TokenKind::BlockComment, start);
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(CustomizerError::UnterminatedComment {
                        line: start.line + 1,
                    })
                }
            }
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    fn scan_string(&mut self, start: Position) -> Result<(), CustomizerError> {
        loop {
            match self.cursor.advance() {
                Some('"') => break,
                Some('\\') => {
                    self.cursor.advance();
                }
                Some(_) => {}
                None => {
                    return Err(CustomizerError::UnterminatedString {
                        line: start.line + 1,
                    })
                }
            }
        }
        self.push(TokenKind::String, start);
        Ok(())
    }

    /// Scan the remainder of a number literal.
    fn scan_number(&mut self) {
        let mut has_dot = false;
        let mut has_exponent = false;

        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' => {
                    self.cursor.advance();
                }
                '.' if !has_dot && !has_exponent => {
                    has_dot = true;
                    self.cursor.advance();
                }
                'e' | 'E' if !has_exponent => {
                    has_exponent = true;
                    self.cursor.advance();
                    if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }
}

fn keyword(text: &str) -> TokenKind {
    match text {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "undef" => TokenKind::Undef,
        "module" => TokenKind::Module,
        "function" => TokenKind::Function,
        "if" | "else" | "for" | "let" | "each" | "include" | "use" => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_assignment() {
        assert_eq!(
            kinds("radius = 90;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_comments() {
        let tokens = Lexer::new("// Base connector\nbase = \"male\"; // [male, female]")
            .tokenize()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::LineComment);
        assert_eq!(tokens[0].line(), 0);
        assert_eq!(tokens[5].kind, TokenKind::LineComment);
        assert_eq!(tokens[5].comment_body(), Some("[male, female]"));
        assert_eq!(tokens[5].line(), 1);
    }

    #[test]
    fn test_tokenize_block_comment() {
        let tokens = Lexer::new("/* [Curves] */ left = true;").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[0].comment_body(), Some("[Curves]"));
    }

    #[test]
    fn test_tokenize_keywords() {
        assert_eq!(
            kinds("true false undef module function if"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Undef,
                TokenKind::Module,
                TokenKind::Function,
                TokenKind::Keyword,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_equality_is_not_assignment() {
        assert_eq!(kinds("a == b")[1], TokenKind::Punct);
    }

    #[test]
    fn test_tokenize_float_and_exponent() {
        let tokens = Lexer::new("3.14 1e-3 .5").tokenize().unwrap();
        assert_eq!(tokens[0].text, "3.14");
        assert_eq!(tokens[1].text, "1e-3");
        assert_eq!(tokens[2].text, ".5");
    }

    #[test]
    fn test_tokenize_escaped_string() {
        let tokens = Lexer::new(r#"s = "a \"b\"";"#).tokenize().unwrap();
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, r#""a \"b\"""#);
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("a = 1;\nb = \"oops;").tokenize().unwrap_err();
        assert!(matches!(err, CustomizerError::UnterminatedString { line: 2 }));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = Lexer::new("/* never closed").tokenize().unwrap_err();
        assert!(matches!(err, CustomizerError::UnterminatedComment { line: 1 }));
    }
}
