//! Low-level scanner for the fityk command language.
//!
//! This crate is standalone (no `fityk_*` dependencies). It turns one
//! borrowed fragment of command text into `(RawTag, start, len)` triples
//! without allocating, and exposes the raw primitives the context-sensitive
//! fetch modes are built on.
//!
//! ```text
//! &str → Cursor → RawScanner → RawToken { tag, start, len }
//! ```
//!
//! Decoding (numbers, dataset indices), error messages, lookahead and the
//! fetch-mode protocol live in `fityk_lexer`.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::{is_space, Cursor};
pub use raw_scanner::{is_name_continue, RawScanner, ScanMode};
pub use tag::{RawTag, RawToken};
