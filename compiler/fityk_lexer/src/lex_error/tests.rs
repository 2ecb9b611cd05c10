use pretty_assertions::assert_eq;

use super::*;

#[test]
fn short_offset_has_no_near_context() {
    let err = LexError::unfinished_string("a 'b", 2);
    assert_eq!(err.near, None);
    assert_eq!(err.to_string(), "at 2: unfinished string");
}

#[test]
fn near_context_is_ten_preceding_bytes() {
    let input = "define Foo(a) = a*Gauss(@";
    let err = LexError::unexpected_after_at(input, 25);
    assert_eq!(err.near.as_deref(), Some(" a*Gauss(@"));
    assert_eq!(
        err.to_string(),
        "at 25, near ` a*Gauss(@': unexpected character after '@'"
    );
}

#[test]
fn near_context_at_exactly_ten() {
    let err = LexError::unexpected_character("0123456789&", '&', 10);
    assert_eq!(err.near.as_deref(), Some("0123456789"));
    assert_eq!(
        err.to_string(),
        "at 10, near `0123456789': unexpected character: &"
    );
}

#[test]
fn near_context_widens_to_char_boundary() {
    // 'é' is two bytes at 0..2; offset 11 would start the window inside it
    let input = "é123456789&";
    let err = LexError::unexpected_character(input, '&', 11);
    assert_eq!(err.near.as_deref(), Some("123456789"));
}

#[test]
fn sigil_messages() {
    assert_eq!(
        LexError::unexpected_after_sigil("$1", '$', 1).message(),
        "unexpected character after '$'"
    );
    assert_eq!(
        LexError::unexpected_after_sigil("%(", '%', 1).message(),
        "unexpected character after '%'"
    );
}

#[test]
fn expectation_with_and_without_found() {
    let err = LexError::expectation_mismatch(
        "fit 3",
        "lower_case_name".to_owned(),
        Some("number".to_owned()),
        5,
    );
    assert_eq!(err.message(), "expected lower_case_name instead of number");

    let err = LexError::expectation_mismatch("fit", "`('".to_owned(), None, 3);
    assert_eq!(err.to_string(), "at 3: expected `('");
}

#[test]
fn invalid_number_message() {
    let err = LexError::invalid_number("@99", "@99", 0);
    assert_eq!(err.kind, LexErrorKind::InvalidNumber { text: "@99".to_owned() });
    assert_eq!(err.message(), "invalid number: @99");
}

#[test]
fn syntax_kind_is_verbatim() {
    let err = LexError::new(
        LexErrorKind::Syntax("unknown function type".to_owned()),
        "guess Foo",
        9,
    );
    assert_eq!(err.to_string(), "at 9: unknown function type");
}
