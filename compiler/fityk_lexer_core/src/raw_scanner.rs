//! Hand-written raw scanner producing `(RawTag, start, len)` triples.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values with
//! zero heap allocation. It does not decode numbers or dataset indices and
//! does not build error messages; those are deferred to the cooking layer.
//!
//! # Design
//!
//! Each call skips leading whitespace, then dispatches on the first byte.
//! Two-character operators are resolved with one byte of lookahead inside
//! the arm that owns the first character, so every arm stays local. The end
//! of input and `#` both produce zero-length terminators that do not advance
//! the cursor: asking again yields the same terminator.
//!
//! Besides ordinary scanning the scanner exposes the raw extension
//! primitives ([`eat_word`](RawScanner::eat_word),
//! [`eat_command`](RawScanner::eat_command),
//! [`eat_line`](RawScanner::eat_line)) that the word, rest-of-command and
//! rest-of-line fetch modes are built on.

use crate::cursor::{is_space, Cursor};
use crate::tag::{RawTag, RawToken};

/// Whether `*` may continue a `$`/`%` name.
///
/// Whether `$p*` is a name pattern (`delete $p*`) or a multiplication
/// (`$c = $p*$q`) depends on grammatical position, so the caller chooses
/// per call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// `*` after a name is the multiplication operator.
    #[default]
    Normal,
    /// `*` is accepted inside `$`/`%` names as a wildcard.
    Glob,
}

/// Pure, allocation-free scanner over one command fragment.
///
/// Produces one token at a time. Error conditions are encoded as
/// [`RawTag`] variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset of the scanner.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Rewind (or move) the scanner to `pos`.
    #[inline]
    pub fn reset(&mut self, pos: u32) {
        self.cursor.set_pos(pos);
    }

    /// Length of the scannable fragment.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.cursor.source_len()
    }

    /// Source text between two positions previously reported by the scanner.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the fragment is exhausted
    /// and `RawTag::Comment` with `len == 0` at a `#`. Neither advances past
    /// the terminator, so subsequent calls keep returning it.
    pub fn next_token(&mut self, mode: ScanMode) -> RawToken {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.token(start, RawTag::Eof),
            b'#' => self.token(start, RawTag::Comment),
            b'\'' => self.string(start),
            b'>' => self.greater(start),
            b'<' => self.less(start),
            b'=' => self.pair(start, b'=', RawTag::EqualEqual, RawTag::Equal),
            b'+' => self.plus(start),
            b'-' => self.pair(start, b'=', RawTag::SubAssign, RawTag::Minus),
            b'!' => self.pair(start, b'=', RawTag::NotEqual, RawTag::Bang),
            b'.' => self.dot(start),
            b'@' => self.dataset(start),
            b'$' => self.sigil_name(start, RawTag::VarName, mode),
            b'%' => self.sigil_name(start, RawTag::FuncName, mode),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'^' => self.single(start, RawTag::Caret),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.single(start, RawTag::Colon),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b'0'..=b'9' => self.number(start),
            b'A'..=b'Z' => self.upper(start),
            b'a'..=b'z' | b'_' => self.lower_name(start),
            _ => self.invalid_char(start),
        }
    }

    // ─── Fetch-mode Primitives ─────────────────────────────────────

    /// Advance past whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.cursor.eat_whitespace();
    }

    /// Advance over every byte that is not whitespace, `;`, `#` or the end.
    ///
    /// Extends a token into a bare word such as a file path.
    pub fn eat_word(&mut self) {
        self.cursor
            .eat_while(|b| b != 0 && b != b';' && b != b'#' && !is_space(b));
    }

    /// Advance to the next `;` or `#`, or to the end of the fragment.
    pub fn eat_command(&mut self) {
        self.cursor.eat_until_either(b';', b'#');
    }

    /// Advance to the end of the fragment.
    pub fn eat_line(&mut self) {
        self.cursor.eat_to_end();
    }

    // ─── Helpers ───────────────────────────────────────────────────

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            start,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// One-byte token that becomes `long` when followed by `second`.
    fn pair(&mut self, start: u32, second: u8, long: RawTag, short: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(start, long)
        } else {
            self.token(start, short)
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        let tag = match self.cursor.current() {
            b'=' => RawTag::GreaterEqual,
            b'>' => RawTag::Append,
            _ => return self.token(start, RawTag::Greater),
        };
        self.cursor.advance();
        self.token(start, tag)
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        let tag = match self.cursor.current() {
            b'=' => RawTag::LessEqual,
            // `<>` is an alias of `!=`
            b'>' => RawTag::NotEqual,
            _ => return self.token(start, RawTag::Less),
        };
        self.cursor.advance();
        self.token(start, tag)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '+'
        let tag = match self.cursor.current() {
            b'-' => RawTag::PlusMinus,
            b'=' => RawTag::AddAssign,
            _ => return self.token(start, RawTag::Plus),
        };
        self.cursor.advance();
        self.token(start, tag)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        match self.cursor.current() {
            b'0'..=b'9' => {
                self.eat_digits();
                self.eat_exponent();
                self.token(start, RawTag::Number)
            }
            b'.' => {
                self.cursor.advance(); // second '.'
                if self.cursor.current() == b'.' {
                    self.cursor.advance();
                }
                self.token(start, RawTag::Dots)
            }
            _ => self.token(start, RawTag::Dot),
        }
    }

    // ─── Strings ───────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''
        if self.cursor.eat_until(b'\'') {
            self.cursor.advance(); // consume closing '\''
            self.token(start, RawTag::String)
        } else {
            self.cursor.eat_to_end();
            self.token(start, RawTag::UnterminatedString)
        }
    }

    // ─── Sigils ────────────────────────────────────────────────────

    fn dataset(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '@'
        match self.cursor.current() {
            b'*' | b'+' => {
                self.cursor.advance();
                self.token(start, RawTag::Dataset)
            }
            b'0'..=b'9' => {
                self.eat_digits();
                self.token(start, RawTag::Dataset)
            }
            _ => self.token(start, RawTag::InvalidAfterAt),
        }
    }

    /// `$name` / `%name`.
    ///
    /// A `*` right after the sigil is accepted in both modes: `$*` is never
    /// ambiguous, and peeking at it must not fail.
    fn sigil_name(&mut self, start: u32, tag: RawTag, mode: ScanMode) -> RawToken {
        self.cursor.advance(); // consume sigil
        let first = self.cursor.current();
        if !(first.is_ascii_alphabetic() || first == b'_' || first == b'*') {
            return self.token(start, RawTag::InvalidAfterSigil);
        }
        self.cursor.advance();
        match mode {
            ScanMode::Normal => self.cursor.eat_while(is_name_continue),
            ScanMode::Glob => self
                .cursor
                .eat_while(|b| is_name_continue(b) || b == b'*'),
        }
        self.token(start, tag)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Decimal floating literal: `digits [. digits] [exponent]`.
    fn number(&mut self, start: u32) -> RawToken {
        self.eat_digits();
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.eat_digits();
        }
        self.eat_exponent();
        self.token(start, RawTag::Number)
    }

    #[inline]
    fn eat_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    /// Consume `e[+-]digits` only when at least one digit follows, so
    /// `2e` scans as the number `2` followed by the name `e`.
    fn eat_exponent(&mut self) {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return;
        }
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        } else if matches!(self.cursor.peek(), b'+' | b'-') && self.cursor.peek2().is_ascii_digit()
        {
            self.cursor.advance_n(2);
        } else {
            return;
        }
        self.eat_digits();
    }

    // ─── Names ─────────────────────────────────────────────────────

    fn upper(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume uppercase letter
        if self.cursor.current().is_ascii_alphanumeric() {
            self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
            self.token(start, RawTag::CamelName)
        } else {
            self.token(start, RawTag::UpperLetter)
        }
    }

    fn lower_name(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_name_continue);
        self.token(start, RawTag::LowerName)
    }

    // ─── Errors ────────────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidChar)
    }
}

/// Continuation byte of a lowercase or sigil-prefixed name.
#[inline]
pub fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
