//! Raw token tags produced by the scanner.
//!
//! Tags are grouped into discriminant ranges so related categories can be
//! tested with a single comparison:
//!
//! | range   | category                          |
//! |---------|-----------------------------------|
//! | 0-15    | names and literals                |
//! | 32-47   | multi-character operators         |
//! | 64-95   | single-character punctuation      |
//! | 112-113 | line terminators                  |
//! | 240-243 | scan errors                       |

/// Lexical category of a raw token.
///
/// Error conditions are encoded as tags, not as `Result::Err`: the scanner
/// stays allocation-free and leaves message construction to the caller.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Names & Literals: 0-15 ===
    /// `foo`, `_x1`: lowercase letter or underscore start.
    LowerName = 0,
    /// `Gaussian`: uppercase letter followed by alphanumerics.
    CamelName = 1,
    /// `F`: an uppercase letter standing alone.
    UpperLetter = 2,
    /// `'text'`: both quotes included.
    String = 3,
    /// `$name`, `$*`, `$p*` (glob mode).
    VarName = 4,
    /// `%name`, `%*`, `%f*` (glob mode).
    FuncName = 5,
    /// `3.14`, `.5`, `2e10`.
    Number = 6,
    /// `@0`, `@*`, `@+`.
    Dataset = 7,

    // === Multi-character Operators: 32-47 ===
    /// `<=`
    LessEqual = 32,
    /// `>=`
    GreaterEqual = 33,
    /// `!=` or `<>`
    NotEqual = 34,
    /// `==`
    EqualEqual = 35,
    /// `>>`
    Append = 36,
    /// `..` or `...`
    Dots = 37,
    /// `+-`
    PlusMinus = 38,
    /// `+=`
    AddAssign = 39,
    /// `-=`
    SubAssign = 40,

    // === Single-character Punctuation: 64-95 ===
    LeftParen = 64,
    RightParen = 65,
    LeftBracket = 66,
    RightBracket = 67,
    LeftBrace = 68,
    RightBrace = 69,
    Plus = 70,
    Minus = 71,
    Star = 72,
    Slash = 73,
    Caret = 74,
    Less = 75,
    Greater = 76,
    Equal = 77,
    Comma = 78,
    Semicolon = 79,
    Dot = 80,
    Colon = 81,
    Tilde = 82,
    Question = 83,
    Bang = 84,

    // === Line Terminators: 112-113 (zero length) ===
    /// `#`: the rest of the fragment is a comment.
    Comment = 112,
    /// End of the fragment.
    Eof = 113,

    // === Errors: 240-243 ===
    /// `'` without a closing quote. Spans to end of input.
    UnterminatedString = 240,
    /// `$`/`%` not followed by a name start. Spans the sigil.
    InvalidAfterSigil = 241,
    /// `@` not followed by `*`, `+` or a digit. Spans the `@`.
    InvalidAfterAt = 242,
    /// A character that starts no token. Spans the full character.
    InvalidChar = 243,
}

impl RawTag {
    /// Fixed source text of punctuation tags.
    ///
    /// Returns `None` for tags whose text varies (names, literals), for the
    /// variable-length `Dots` and `NotEqual` tags, and for terminators and
    /// errors.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::Append => ">>",
            Self::PlusMinus => "+-",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Tilde => "~",
            Self::Question => "?",
            Self::Bang => "!",
            _ => return None,
        })
    }

    /// `true` for the scan-error tags.
    #[inline]
    pub fn is_error(self) -> bool {
        self as u8 >= 240
    }

    /// `true` for the zero-length terminators (`Comment`, `Eof`).
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, Self::Comment | Self::Eof)
    }
}

/// One scanned token: tag plus byte extent in the fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    /// Byte offset of the first character (after leading whitespace).
    pub start: u32,
    pub len: u32,
}

impl RawToken {
    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}
