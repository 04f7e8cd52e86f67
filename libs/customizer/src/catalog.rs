//! # Parameter Catalog
//!
//! Collects the Customizer parameters of a model: top-level assignments of
//! literal values that appear before the first `module` or `function`
//! declaration.
//!
//! ```text
//! /* [Connectors] */          ← group of the following parameters
//! // Connector at the base   ← description
//! base = "male"; // [male, female]
//!                  └── annotation → possible values
//! ```

use crate::error::CustomizerError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::possible::Possible;
use crate::span::Span;
use crate::value::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

// =============================================================================
// VARIABLE
// =============================================================================

/// One Customizer parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Parameter name.
    pub name: String,
    /// Value assigned in the source.
    pub default: Value,
    /// Allowed values.
    pub possible: Possible,
    /// Comment on the line above the assignment.
    pub description: Option<String>,
    /// Enclosing `/* [Group] */` header.
    pub group: Option<String>,
    /// Span of the assignment statement.
    pub span: Span,
}

impl Variable {
    /// True when the parameter sits in OpenSCAD's `[Hidden]` group.
    pub fn is_hidden(&self) -> bool {
        self.group.as_deref() == Some("Hidden")
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Ordered set of a model's parameters.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::{Catalog, Value};
///
/// let catalog = Catalog::from_source(r#"
///     base = "male"; // [male, female]
///     radius = 90; // [90:small, 180:large]
///     module track() {}
///     hidden = 1;
/// "#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// let radius = catalog.get("radius").unwrap();
/// assert_eq!(radius.possible.get("large"), Some(Value::Number(180.0)));
/// assert!(catalog.get("hidden").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Read and parse a model file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CustomizerError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CustomizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_source(&source)?;
        debug!(
            path = %path.display(),
            parameters = catalog.len(),
            hidden = catalog.iter().filter(|v| v.is_hidden()).count(),
            "loaded customizer catalog"
        );
        Ok(catalog)
    }

    /// Parse the parameters of a model source.
    pub fn from_source(source: &str) -> Result<Self, CustomizerError> {
        let tokens = Lexer::new(source).tokenize()?;
        CatalogParser::new(&tokens).parse()
    }

    /// Add a parameter; a reassignment replaces the earlier one in place.
    pub fn insert(&mut self, variable: Variable) {
        match self.position(&variable.name) {
            Some(i) => self.variables[i] = variable,
            None => {
                self.index.insert(variable.name.clone(), self.variables.len());
                self.variables.push(variable);
            }
        }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.position(name).map(|i| &self.variables[i])
    }

    /// Check whether a parameter exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a parameter in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<Variable> for Catalog {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for variable in iter {
            catalog.insert(variable);
        }
        catalog
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Walks the token stream tracking nesting depth; only depth-0 statements
/// are candidates.
struct CatalogParser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    group: Option<String>,
    /// Last depth-0 line comment that starts its line, and that line.
    comment: Option<(usize, String)>,
    catalog: Catalog,
}

impl<'t> CatalogParser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            group: None,
            comment: None,
            catalog: Catalog::default(),
        }
    }

    fn parse(mut self) -> Result<Catalog, CustomizerError> {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.pos) {
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Module | TokenKind::Function if self.depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    self.depth += 1;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    self.depth = self.depth.saturating_sub(1);
                }
                TokenKind::LineComment if self.depth == 0 => {
                    // Trailing comments of other statements describe nothing.
                    let leads_line = self
                        .pos
                        .checked_sub(1)
                        .and_then(|prev| tokens.get(prev))
                        .map_or(true, |prev| prev.span.end.line != token.line());
                    self.comment = token
                        .comment_body()
                        .filter(|_| leads_line)
                        .map(|body| (token.line(), body.to_string()));
                }
                TokenKind::BlockComment if self.depth == 0 => {
                    if let Some(group) = group_header(token) {
                        self.group = Some(group);
                    }
                }
                TokenKind::Identifier if self.depth == 0 => {
                    if self.assignment()? {
                        continue;
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }

        Ok(self.catalog)
    }

    fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Try `name = <literal>;` at the current position.
    ///
    /// Returns true and advances past the statement (and its annotation) when
    /// the assignment is a parameter; otherwise leaves the position unchanged.
    fn assignment(&mut self) -> Result<bool, CustomizerError> {
        let tokens = self.tokens;
        let start = self.pos;
        let name_token = &tokens[start];
        if self.peek(1).map(|t| t.kind) != Some(TokenKind::Eq) {
            return Ok(false);
        }

        let mut cursor = start + 2;
        let Some(default) = literal(tokens, &mut cursor)? else {
            return Ok(false);
        };
        let Some(semicolon) = tokens
            .get(cursor)
            .filter(|t| t.kind == TokenKind::Semicolon)
        else {
            return Ok(false);
        };
        cursor += 1;

        let annotation = tokens
            .get(cursor)
            .filter(|t| t.kind == TokenKind::LineComment && t.line() == semicolon.line());
        if annotation.is_some() {
            cursor += 1;
        }

        let name = name_token.text.clone();
        let possible = Possible::from_annotation(
            annotation.and_then(Token::comment_body),
            &default,
        )
        .map_err(|reason| CustomizerError::InvalidAnnotation {
            variable: name.clone(),
            line: name_token.span.line_number(),
            reason,
        })?;

        let description = self
            .comment
            .take()
            .filter(|(line, _)| line + 1 == name_token.line())
            .map(|(_, text)| text);

        self.catalog.insert(Variable {
            name,
            default,
            possible,
            description,
            group: self.group.clone(),
            span: Span::new(name_token.span.start, semicolon.span.end),
        });

        self.pos = cursor;
        Ok(true)
    }
}

/// `/* [Group Name] */` → `Group Name`.
fn group_header(token: &Token) -> Option<String> {
    token
        .comment_body()
        .and_then(|body| body.strip_prefix('['))
        .and_then(|body| body.strip_suffix(']'))
        .map(|name| name.trim().to_string())
}

/// Parse a literal expression starting at `*pos`.
///
/// Returns `Ok(None)` when the expression is not a plain literal; `*pos` is
/// then unspecified.
fn literal(tokens: &[Token], pos: &mut usize) -> Result<Option<Value>, CustomizerError> {
    let Some(token) = tokens.get(*pos) else {
        return Ok(None);
    };
    *pos += 1;

    let value = match token.kind {
        TokenKind::Number => Value::Number(number(token)?),
        TokenKind::Minus => match tokens.get(*pos) {
            Some(next) if next.kind == TokenKind::Number => {
                *pos += 1;
                Value::Number(-number(next)?)
            }
            _ => return Ok(None),
        },
        TokenKind::String => Value::String(unescape(&token.text)),
        TokenKind::True => Value::Boolean(true),
        TokenKind::False => Value::Boolean(false),
        TokenKind::Undef => Value::Undef,
        TokenKind::LBracket => {
            let mut items = Vec::new();
            loop {
                if tokens.get(*pos).map(|t| t.kind) == Some(TokenKind::RBracket) {
                    *pos += 1;
                    break;
                }
                let Some(item) = literal(tokens, pos)? else {
                    return Ok(None);
                };
                items.push(item);
                match tokens.get(*pos).map(|t| t.kind) {
                    Some(TokenKind::Comma) => *pos += 1,
                    Some(TokenKind::RBracket) => {}
                    _ => return Ok(None),
                }
            }
            Value::Vector(items)
        }
        _ => return Ok(None),
    };

    Ok(Some(value))
}

fn number(token: &Token) -> Result<f64, CustomizerError> {
    token
        .text
        .parse()
        .map_err(|_| CustomizerError::InvalidNumber {
            text: token.text.clone(),
            line: token.span.line_number(),
        })
}

/// Strip the quotes of a string token and resolve escapes.
fn unescape(text: &str) -> String {
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
