//! Token cooking layer.
//!
//! Turns `RawToken`s from the raw scanner into [`Token`]s:
//!
//! ```text
//! &str → RawScanner → RawToken { tag, start, len } → TokenCooker → Token
//! ```
//!
//! - **Operators/punctuation**: direct 1:1 mapping
//! - **Names/strings**: kind only, text stays borrowed
//! - **Numbers, datasets**: decode the payload
//! - **Terminators**: zero-length `Nop`
//! - **Errors**: build the `LexError` with its offset

use fityk_lexer_core::{RawTag, RawToken};

use crate::{Dataset, LexError, Span, Token, TokenKind, TokenValue};

/// Cooks raw tokens of one fragment. Stateless apart from the fragment
/// itself, which error construction needs for the near-context.
pub(crate) struct TokenCooker<'src> {
    input: &'src str,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self { input }
    }

    /// Cook one raw token whose source text is `text`.
    pub(crate) fn cook(&self, raw: RawToken, text: &'src str) -> Result<Token<'src>, LexError> {
        let kind = match raw.tag {
            RawTag::LowerName => TokenKind::LowerName,
            RawTag::CamelName => TokenKind::CamelName,
            RawTag::UpperLetter => TokenKind::UpperLetter,
            RawTag::String => TokenKind::String,
            RawTag::VarName => TokenKind::VarName,
            RawTag::FuncName => TokenKind::FuncName,
            RawTag::Number => return self.cook_number(raw, text),
            RawTag::Dataset => return self.cook_dataset(raw, text),

            RawTag::LessEqual => TokenKind::LessEq,
            RawTag::GreaterEqual => TokenKind::GreaterEq,
            RawTag::NotEqual => TokenKind::NotEq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::Append => TokenKind::Append,
            RawTag::Dots => TokenKind::Dots,
            RawTag::PlusMinus => TokenKind::PlusMinus,
            RawTag::AddAssign => TokenKind::AddAssign,
            RawTag::SubAssign => TokenKind::SubAssign,

            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Less => TokenKind::Less,
            RawTag::Greater => TokenKind::Greater,
            RawTag::Equal => TokenKind::Assign,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::Question => TokenKind::Question,
            RawTag::Bang => TokenKind::Bang,

            RawTag::Comment | RawTag::Eof => return Ok(Token::nop(raw.start)),

            RawTag::UnterminatedString => {
                return Err(LexError::unfinished_string(self.input, raw.start))
            }
            RawTag::InvalidAfterSigil => {
                let sigil = text.chars().next().unwrap_or('$');
                return Err(LexError::unexpected_after_sigil(
                    self.input,
                    sigil,
                    raw.end(),
                ));
            }
            RawTag::InvalidAfterAt => {
                return Err(LexError::unexpected_after_at(self.input, raw.end()))
            }
            RawTag::InvalidChar => {
                let found = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::unexpected_character(
                    self.input, found, raw.start,
                ));
            }
        };
        Ok(Token::new(kind, text, span_of(raw), TokenValue::None))
    }

    fn cook_number(&self, raw: RawToken, text: &'src str) -> Result<Token<'src>, LexError> {
        match text.parse::<f64>() {
            Ok(value) => Ok(Token::new(
                TokenKind::Number,
                text,
                span_of(raw),
                TokenValue::Number(value),
            )),
            Err(_) => Err(LexError::invalid_number(self.input, text, raw.start)),
        }
    }

    /// `@*`, `@+` or `@` followed by digits; the scanner guarantees the shape.
    fn cook_dataset(&self, raw: RawToken, text: &'src str) -> Result<Token<'src>, LexError> {
        let dataset = match text.get(1..) {
            Some("*") => Dataset::All,
            Some("+") => Dataset::New,
            Some(digits) => match digits.parse::<usize>() {
                Ok(n) => Dataset::Index(n),
                Err(_) => return Err(LexError::invalid_number(self.input, text, raw.start)),
            },
            None => return Err(LexError::invalid_number(self.input, text, raw.start)),
        };
        Ok(Token::new(
            TokenKind::Dataset,
            text,
            span_of(raw),
            TokenValue::Dataset(dataset),
        ))
    }
}

#[inline]
fn span_of(raw: RawToken) -> Span {
    Span::new(raw.start, raw.end())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
