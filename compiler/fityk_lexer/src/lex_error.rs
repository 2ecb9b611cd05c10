//! Lexer error types.
//!
//! Every failure is a [`LexError`]: what went wrong, the byte offset at which
//! lexing stopped, and up to ten bytes of preceding text so that a user
//! typing a long command can see where it broke. Errors are values; the
//! lexer performs no recovery.

use std::fmt;

use thiserror::Error;

/// Bytes of context shown before the error offset.
const NEAR_CONTEXT: u32 = 10;

/// A lexical (or parser-raised syntax) error located in the fragment.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("at {offset}{}: {kind}", NearClause(.near.as_deref()))]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset into the fragment.
    pub offset: u32,
    /// The text right before `offset`, present when `offset >= 10`.
    pub near: Option<String>,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// `'` without a closing quote.
    #[error("unfinished string")]
    UnfinishedString,
    /// `$` or `%` not followed by a name.
    #[error("unexpected character after '{sigil}'")]
    UnexpectedCharacterAfterSigil { sigil: char },
    /// `@` not followed by `*`, `+` or a digit.
    #[error("unexpected character after '@'")]
    UnexpectedCharacterAfterAt,
    /// A character that starts no token.
    #[error("unexpected character: {found}")]
    UnexpectedCharacter { found: char },
    /// The next token is not what the parser asked for.
    ///
    /// `found` is `None` when the input ended (or a comment started).
    #[error("expected {expected}{}", InsteadOf(.found.as_deref()))]
    ExpectationMismatch {
        expected: String,
        found: Option<String>,
    },
    /// A numeric literal or dataset index that does not fit its type.
    #[error("invalid number: {text}")]
    InvalidNumber { text: String },
    /// Raised by the parser through [`Lexer::syntax_error`](crate::Lexer::syntax_error).
    #[error("{0}")]
    Syntax(String),
}

impl LexError {
    /// Build an error at `offset`, capturing the near-context from `input`.
    #[cold]
    pub fn new(kind: LexErrorKind, input: &str, offset: u32) -> Self {
        LexError {
            kind,
            offset,
            near: near_context(input, offset),
        }
    }

    /// Create an unfinished string error. `offset` is the opening quote.
    #[cold]
    pub fn unfinished_string(input: &str, offset: u32) -> Self {
        Self::new(LexErrorKind::UnfinishedString, input, offset)
    }

    /// Create a bad-sigil error. `offset` is the byte after the sigil.
    #[cold]
    pub fn unexpected_after_sigil(input: &str, sigil: char, offset: u32) -> Self {
        Self::new(
            LexErrorKind::UnexpectedCharacterAfterSigil { sigil },
            input,
            offset,
        )
    }

    /// Create a bad dataset selector error. `offset` is the byte after `@`.
    #[cold]
    pub fn unexpected_after_at(input: &str, offset: u32) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacterAfterAt, input, offset)
    }

    #[cold]
    pub fn unexpected_character(input: &str, found: char, offset: u32) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter { found }, input, offset)
    }

    #[cold]
    pub fn expectation_mismatch(
        input: &str,
        expected: String,
        found: Option<String>,
        offset: u32,
    ) -> Self {
        Self::new(
            LexErrorKind::ExpectationMismatch { expected, found },
            input,
            offset,
        )
    }

    #[cold]
    pub fn invalid_number(input: &str, text: &str, offset: u32) -> Self {
        Self::new(
            LexErrorKind::InvalidNumber {
                text: text.to_owned(),
            },
            input,
            offset,
        )
    }

    /// The message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Up to ten bytes before `offset`, widened forward to a char boundary.
fn near_context(input: &str, offset: u32) -> Option<String> {
    if offset < NEAR_CONTEXT {
        return None;
    }
    let end = offset as usize;
    let mut start = end - NEAR_CONTEXT as usize;
    while start < end && !input.is_char_boundary(start) {
        start += 1;
    }
    input.get(start..end).map(str::to_owned)
}

/// `, near `...'` or nothing.
struct NearClause<'a>(Option<&'a str>);

impl fmt::Display for NearClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(near) => write!(f, ", near `{near}'"),
            None => Ok(()),
        }
    }
}

/// ` instead of ...` or nothing.
struct InsteadOf<'a>(Option<&'a str>);

impl fmt::Display for InsteadOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(found) => write!(f, " instead of {found}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
