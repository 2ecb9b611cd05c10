//! The lexer engine: one-token lookahead, pushback and the fetch modes.
//!
//! The parser drives a [`Lexer`] one call at a time and picks the fetch
//! operation by grammatical context:
//!
//! - [`next_token`](Lexer::next_token) / [`peek_token`](Lexer::peek_token)
//!   for ordinary tokens
//! - [`next_glob_token`](Lexer::next_glob_token) where `$p*` is a pattern
//! - [`word_token`](Lexer::word_token) for bare file names
//! - [`rest_of_command`](Lexer::rest_of_command) and
//!   [`rest_of_line`](Lexer::rest_of_line) for text handed to another
//!   consumer verbatim
//!
//! A peeked token is cached together with the position scanning started
//! from. Consuming it costs nothing; discarding it rewinds the scanner to
//! the token's start.

use fityk_lexer_core::{Cursor, RawScanner, ScanMode};
use tracing::{debug, trace};

use crate::cook::TokenCooker;
use crate::{LexError, LexErrorKind, Span, Token, TokenKind, TokenValue};

/// A cached peek.
#[derive(Clone, Copy)]
struct Lookahead<'src> {
    token: Token<'src>,
    /// Scanner position before the token was scanned.
    resume: u32,
}

/// Lexer over one borrowed command fragment.
///
/// The fragment ends at the end of the `&str` or at its first NUL byte,
/// whichever comes first. The input is never copied.
pub struct Lexer<'src> {
    input: &'src str,
    scanner: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    lookahead: Option<Lookahead<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Lexer {
            input,
            scanner: RawScanner::new(Cursor::new(input)),
            cooker: TokenCooker::new(input),
            lookahead: None,
        }
    }

    /// The fragment being lexed, up to (not including) a NUL terminator.
    pub fn input(&self) -> &'src str {
        self.scanner.slice(0, self.scanner.source_len())
    }

    /// Byte offset of everything consumed so far.
    ///
    /// A peeked but unconsumed token does not count.
    pub fn position(&self) -> u32 {
        match self.lookahead {
            Some(lookahead) => lookahead.resume,
            None => self.scanner.pos(),
        }
    }

    // ─── Lookahead / Pushback ──────────────────────────────────────

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        let token = match self.lookahead.take() {
            Some(lookahead) => lookahead.token,
            None => self.scan(ScanMode::Normal)?,
        };
        trace!(kind = ?token.kind, span = %token.span, "next_token");
        Ok(token)
    }

    /// Return the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<Token<'src>, LexError> {
        if let Some(lookahead) = self.lookahead {
            return Ok(lookahead.token);
        }
        let resume = self.scanner.pos();
        let token = self.scan(ScanMode::Normal)?;
        self.lookahead = Some(Lookahead { token, resume });
        Ok(token)
    }

    /// Un-consume `token`: the next fetch starts at its first byte.
    ///
    /// `token` must come from this lexer.
    pub fn push_back(&mut self, token: Token<'src>) {
        trace!(kind = ?token.kind, span = %token.span, "push_back");
        self.scanner.reset(token.span.start);
        self.lookahead = None;
    }

    /// Like [`next_token`](Self::next_token), but `*` may continue a `$`/`%`
    /// name (`delete %f*`).
    ///
    /// A cached lookahead is discarded and rescanned. On error the lexer is
    /// left as it was, cached lookahead included.
    pub fn next_glob_token(&mut self) -> Result<Token<'src>, LexError> {
        let saved_pos = self.scanner.pos();
        let saved = self.lookahead.take();
        if let Some(lookahead) = saved {
            self.scanner.reset(lookahead.token.span.start);
        }
        match self.scan(ScanMode::Glob) {
            Ok(token) => {
                trace!(kind = ?token.kind, span = %token.span, "next_glob_token");
                Ok(token)
            }
            Err(err) => {
                self.scanner.reset(saved_pos);
                self.lookahead = saved;
                Err(err)
            }
        }
    }

    // ─── Fetch Modes ───────────────────────────────────────────────

    /// Next token extended into a bare word.
    ///
    /// Strings and `Nop` are returned as they are. Anything else grows over
    /// the following bytes up to whitespace, `;`, `#` or the end, and
    /// becomes a `Word`.
    pub fn word_token(&mut self) -> Result<Token<'src>, LexError> {
        let token = self.next_token()?;
        if matches!(token.kind, TokenKind::String | TokenKind::Nop) {
            return Ok(token);
        }
        self.scanner.eat_word();
        Ok(self.extend(token, TokenKind::Word))
    }

    /// Next token extended up to `;`, `#` or the end, whitespace included.
    ///
    /// Strings and `Nop` are returned as they are; anything else becomes
    /// `Rest`.
    pub fn rest_of_command(&mut self) -> Result<Token<'src>, LexError> {
        let token = self.next_token()?;
        if matches!(token.kind, TokenKind::String | TokenKind::Nop) {
            return Ok(token);
        }
        self.scanner.eat_command();
        Ok(self.extend(token, TokenKind::Rest))
    }

    /// Everything left in the fragment as one `Rest` token.
    ///
    /// Never scans, so never fails: free text such as a title may contain
    /// characters that start no token. Starts at the cached lookahead if
    /// there is one.
    pub fn rest_of_line(&mut self) -> Token<'src> {
        self.scanner.skip_whitespace();
        let start = match self.lookahead.take() {
            Some(lookahead) => lookahead.token.span.start,
            None => self.scanner.pos(),
        };
        self.scanner.eat_line();
        let end = self.scanner.pos();
        let token = Token::new(
            TokenKind::Rest,
            self.scanner.slice(start, end),
            Span::new(start, end),
            TokenValue::None,
        );
        trace!(span = %token.span, "rest_of_line");
        token
    }

    // ─── Expectations ──────────────────────────────────────────────

    /// Consume the next token if it is of `kind`, else fail.
    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.kind == kind {
            return self.next_token();
        }
        Err(self.make_kind_error(kind.name().to_owned(), found))
    }

    /// Consume the next token if it is of `first` or `second` kind.
    pub fn expect_either(
        &mut self,
        first: TokenKind,
        second: TokenKind,
    ) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.kind == first || found.kind == second {
            return self.next_token();
        }
        Err(self.make_kind_error(format!("{first} or {second}"), found))
    }

    /// Consume the next token if its text is exactly `text`.
    pub fn expect_raw(&mut self, text: &str) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.text == text {
            return self.next_token();
        }
        Err(self.make_raw_error(quoted(text), found))
    }

    /// Consume the next token if its text is `first` or `second`.
    pub fn expect_raw_either(&mut self, first: &str, second: &str) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.text == first || found.text == second {
            return self.next_token();
        }
        Err(self.make_raw_error(
            format!("{} or {}", quoted(first), quoted(second)),
            found,
        ))
    }

    /// Consume the next token if it is of `kind` or its text is `text`.
    pub fn expect_kind_or_raw(
        &mut self,
        kind: TokenKind,
        text: &str,
    ) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.kind == kind || found.text == text {
            return self.next_token();
        }
        Err(self.make_raw_error(format!("{kind} or {}", quoted(text)), found))
    }

    /// Consume the next token if it is of `kind`.
    ///
    /// Otherwise nothing is consumed and a zero-length `Nop` at
    /// [`position`](Self::position) is returned.
    pub fn consume_if(&mut self, kind: TokenKind) -> Result<Token<'src>, LexError> {
        let found = self.peek_token()?;
        if found.kind == kind {
            return self.next_token();
        }
        Ok(Token::nop(self.position()))
    }

    /// Build an error for the parser, located where scanning stands now.
    #[cold]
    pub fn syntax_error(&self, message: impl Into<String>) -> LexError {
        let err = LexError::new(
            LexErrorKind::Syntax(message.into()),
            self.input,
            self.scanner.pos(),
        );
        debug!(%err, "syntax error");
        err
    }

    // ─── Helpers ───────────────────────────────────────────────────

    /// Scan and cook one token. On error the scanner is rewound.
    fn scan(&mut self, mode: ScanMode) -> Result<Token<'src>, LexError> {
        let before = self.scanner.pos();
        let raw = self.scanner.next_token(mode);
        let text = self.scanner.slice(raw.start, raw.end());
        self.cooker.cook(raw, text).map_err(|err| {
            self.scanner.reset(before);
            debug!(%err, "scan failed");
            err
        })
    }

    /// `token` widened to the scanner position and reclassified as `kind`.
    fn extend(&self, token: Token<'src>, kind: TokenKind) -> Token<'src> {
        let start = token.span.start;
        let end = self.scanner.pos();
        let extended = Token::new(
            kind,
            self.scanner.slice(start, end),
            Span::new(start, end),
            TokenValue::None,
        );
        trace!(kind = ?kind, span = %extended.span, "extended");
        extended
    }

    /// Mismatch naming the found token by its kind.
    #[cold]
    #[inline(never)]
    fn make_kind_error(&self, expected: String, found: Token<'src>) -> LexError {
        let found = (!found.is_nop()).then(|| found.kind.name().to_owned());
        self.make_mismatch(expected, found)
    }

    /// Mismatch naming the found token by its text.
    #[cold]
    #[inline(never)]
    fn make_raw_error(&self, expected: String, found: Token<'src>) -> LexError {
        let found = (!found.is_nop()).then(|| quoted(found.text));
        self.make_mismatch(expected, found)
    }

    /// The offset is the scan position after the offending (peeked) token,
    /// so the near-context ends with it.
    fn make_mismatch(&self, expected: String, found: Option<String>) -> LexError {
        let err = LexError::expectation_mismatch(self.input, expected, found, self.scanner.pos());
        debug!(%err, "expectation failed");
        err
    }
}

/// `` `text' ``
fn quoted(text: &str) -> String {
    format!("`{text}'")
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
