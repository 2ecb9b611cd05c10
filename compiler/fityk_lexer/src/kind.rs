//! The closed catalog of token kinds.

use std::fmt;

/// Lexical category of a [`Token`](crate::Token).
///
/// `Word`, `Rest` come from the context-sensitive fetch modes; `Expr` and
/// `VarExpr` are never scanned, the parser builds them when it replaces a
/// parsed sub-expression by one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Names and literals
    LowerName,
    CamelName,
    UpperLetter,
    String,
    VarName,
    FuncName,
    Number,
    Dataset,

    // Opaque kinds
    Word,
    Expr,
    VarExpr,
    Rest,

    /// End of input or start of a `#` comment.
    Nop,

    // Multi-character operators
    LessEq,
    GreaterEq,
    /// `!=`, also produced by `<>`.
    NotEq,
    EqEq,
    Append,
    /// `..` or `...`
    Dots,
    PlusMinus,
    AddAssign,
    SubAssign,

    // Single-character punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Less,
    Greater,
    Assign,
    Comma,
    Semicolon,
    Dot,
    Colon,
    Tilde,
    Question,
    Bang,
}

impl TokenKind {
    /// Display name used in diagnostics (`expected lower_case_name ...`).
    ///
    /// Punctuation renders as its glyph, categories as a descriptive label.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LowerName => "lower_case_name",
            TokenKind::CamelName => "CamelCaseName",
            TokenKind::UpperLetter => "Upper-case-letter",
            TokenKind::String => "'quoted-string'",
            TokenKind::VarName => "$variable_name",
            TokenKind::FuncName => "%func_name",
            TokenKind::Number => "number",
            TokenKind::Dataset => "@dataset",
            TokenKind::Word => "word",
            TokenKind::Expr => "expr",
            TokenKind::VarExpr => "var-expr",
            TokenKind::Rest => "rest-of-line",
            TokenKind::Nop => "Nop",
            TokenKind::LessEq => "<=",
            TokenKind::GreaterEq => ">=",
            TokenKind::NotEq => "!=",
            TokenKind::EqEq => "==",
            TokenKind::Append => ">>",
            TokenKind::Dots => "..",
            TokenKind::PlusMinus => "+-",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Assign => "=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Tilde => "~",
            TokenKind::Question => "?",
            TokenKind::Bang => "!",
        }
    }

    /// Fixed source text of the operator and punctuation kinds.
    ///
    /// `None` for kinds with varying text. `Dots` and `NotEq` also return
    /// `None`: they are spelled `...` and `<>` as well.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LowerName
            | TokenKind::CamelName
            | TokenKind::UpperLetter
            | TokenKind::String
            | TokenKind::VarName
            | TokenKind::FuncName
            | TokenKind::Number
            | TokenKind::Dataset
            | TokenKind::Word
            | TokenKind::Expr
            | TokenKind::VarExpr
            | TokenKind::Rest
            | TokenKind::Nop
            | TokenKind::Dots
            | TokenKind::NotEq => None,
            _ => Some(self.name()),
        }
    }

    /// `true` for kinds whose text is shown in [`Token`](crate::Token)'s
    /// `Display` output.
    pub fn shows_text(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::VarName
                | TokenKind::FuncName
                | TokenKind::LowerName
                | TokenKind::CamelName
                | TokenKind::UpperLetter
                | TokenKind::Word
                | TokenKind::Rest
                | TokenKind::VarExpr
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
