//! Lexer for the fityk command and expression language.
//!
//! Built on the raw scanner in `fityk_lexer_core`:
//!
//! ```text
//! &str → RawScanner → RawToken → TokenCooker → Token
//!                                        ↑
//!                           Lexer (lookahead, fetch modes)
//! ```
//!
//! A [`Lexer`] lexes one command fragment and is driven by the parser, which
//! chooses the fetch operation by grammatical context. Tokens borrow their
//! text from the fragment.
//!
//! ```
//! use fityk_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("delete %f*");
//! lexer.expect_raw("delete")?;
//! let pattern = lexer.next_glob_token()?;
//! assert_eq!(pattern.kind, TokenKind::FuncName);
//! assert_eq!(pattern.decoded(), "f*");
//! # Ok::<(), fityk_lexer::LexError>(())
//! ```

mod cook;
mod kind;
mod lex_error;
mod lexer;
mod span;
mod token;

use std::sync::Once;

pub use kind::TokenKind;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{Dataset, Token, TokenValue};

/// Lex a whole fragment with ordinary scanning.
///
/// Stops at the end of input or at a comment; the closing `Nop` is not
/// included. Parsers drive a [`Lexer`] instead, since the fetch mode
/// depends on context.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.is_nop() {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fityk_lexer=debug`
/// (errors) or `RUST_LOG=fityk_lexer=trace` (every fetched token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
