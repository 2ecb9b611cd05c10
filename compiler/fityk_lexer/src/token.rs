//! Token model.
//!
//! A [`Token`] is a `Copy` snapshot: kind, borrowed text, span and decoded
//! payload. The text borrows from the fragment the [`Lexer`](crate::Lexer)
//! was created over, so tokens never outlive it.

use std::fmt;

use crate::{Span, TokenKind};

/// Dataset selector decoded from `@*`, `@+` or `@n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// `@*`
    All,
    /// `@+`
    New,
    /// `@n`
    Index(usize),
}

/// Decoded payload of a token.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TokenValue {
    #[default]
    None,
    /// Numeric literal, or the value of a parser-built `Expr`.
    Number(f64),
    Dataset(Dataset),
}

/// One lexical unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Raw source text, quotes and sigils included.
    pub text: &'src str,
    pub span: Span,
    pub value: TokenValue,
}

impl<'src> Token<'src> {
    /// Create a token.
    ///
    /// The lexer builds its tokens through this too; the parser uses it for
    /// `Expr` and `VarExpr` tokens standing for a parsed sub-expression.
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, span: Span, value: TokenValue) -> Self {
        Token {
            kind,
            text,
            span,
            value,
        }
    }

    /// Zero-length `Nop` at `pos`.
    #[inline]
    pub const fn nop(pos: u32) -> Self {
        Token::new(TokenKind::Nop, "", Span::point(pos), TokenValue::None)
    }

    #[inline]
    pub fn is_nop(&self) -> bool {
        self.kind == TokenKind::Nop
    }

    /// Raw text of the token.
    #[inline]
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    /// Text with the delimiters removed.
    ///
    /// Strips the quotes of a `String` and the sigil of a `VarName` or
    /// `FuncName`. Other kinds return the raw text.
    pub fn decoded(&self) -> &'src str {
        let text = self.text;
        let stripped = match self.kind {
            TokenKind::String => text
                .strip_prefix('\'')
                .and_then(|t| t.strip_suffix('\'')),
            TokenKind::VarName => text.strip_prefix('$'),
            TokenKind::FuncName => text.strip_prefix('%'),
            _ => None,
        };
        stripped.unwrap_or(text)
    }

    /// Numeric payload, if any.
    #[inline]
    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Dataset payload, if any.
    #[inline]
    pub fn dataset(&self) -> Option<Dataset> {
        match self.value {
            TokenValue::Dataset(dataset) => Some(dataset),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    /// `lower_case_name "fit"`, `number 2.5`, `@dataset '*'`, `expr "a+b" (3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.kind.shows_text() {
            return write!(f, " \"{}\"", self.text);
        }
        match (self.kind, self.value) {
            (TokenKind::Expr, TokenValue::Number(value)) => {
                write!(f, " \"{}\" ({value})", self.text)
            }
            (TokenKind::Expr, _) => write!(f, " \"{}\"", self.text),
            (TokenKind::Number, TokenValue::Number(value)) => write!(f, " {value}"),
            (TokenKind::Dataset, TokenValue::Dataset(Dataset::All)) => f.write_str(" '*'"),
            (TokenKind::Dataset, TokenValue::Dataset(Dataset::New)) => f.write_str(" '+'"),
            (TokenKind::Dataset, TokenValue::Dataset(Dataset::Index(n))) => write!(f, " {n}"),
            _ => Ok(()),
        }
    }
}
