//! Bounds-checked cursor over a borrowed source fragment.
//!
//! The cursor advances through the fragment byte-by-byte. Reads at or past
//! the end of the fragment yield a virtual `0x00` sentinel, so every scanning
//! loop terminates on "end of input" without a separate length check, and no
//! read can leave the borrowed buffer.
//!
//! # Null Termination
//!
//! Command text historically arrives as C strings. The fragment therefore
//! ends at the first NUL byte when one is present: bytes after it are never
//! visited and never become part of a token.

/// Cursor over a borrowed fragment of command text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
/// Positions are byte offsets into the fragment; every position the scanner
/// stores lies on a UTF-8 character boundary.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The borrowed fragment (possibly extending past the first NUL).
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Length of the scannable content: up to the first NUL or the end.
    source_len: u32,
}

/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Fragments larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes; a single command line never comes close.
    pub fn new(src: &'a str) -> Self {
        let bytes = src.as_bytes();
        let end = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.src.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, never past the end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the fragment.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move the cursor to `pos`, clamped to the end of input.
    ///
    /// Used to rewind after a lookahead or a failed scan. `pos` must be a
    /// position previously reported by this cursor.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    /// Length of the scannable content (up to the first NUL byte).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a substring of the fragment.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the scannable content and on character
    /// boundaries. Token boundaries produced by the scanner always do:
    /// they only ever stop at ASCII bytes or at the end of input.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start as usize..end as usize]
    }

    /// Extract a substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop spins on the end
    /// sentinel. All ASCII classification predicates satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past whitespace (the C `isspace` set).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next occurrence of `byte`.
    ///
    /// Returns `true` with the cursor on the found byte, or `false` with the
    /// cursor unchanged when the byte does not occur before end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.remaining()) {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => false,
        }
    }

    /// Advance to the next `a` or `b` byte, or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until_either(&mut self, a: u8, b: u8) {
        match memchr::memchr2(a, b, self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to end of input.
    #[inline]
    pub fn eat_to_end(&mut self) {
        self.pos = self.source_len;
    }

    fn remaining(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.pos as usize..self.source_len as usize]
    }
}

/// Whitespace as classified by C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
