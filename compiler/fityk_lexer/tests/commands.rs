//! Lexing real fityk command lines the way a parser drives the lexer.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fityk_lexer::{tokenize, Dataset, LexErrorKind, Lexer, TokenKind};
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<&str> {
    tokenize(source).unwrap().iter().map(|t| t.text).collect()
}

// -- Single tokens --

#[test]
fn operators_consume_exact_length() {
    let cases = [
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("^", TokenKind::Caret),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
        ("~", TokenKind::Tilde),
        ("?", TokenKind::Question),
        (".", TokenKind::Dot),
        (">=", TokenKind::GreaterEq),
        (">>", TokenKind::Append),
        (">", TokenKind::Greater),
        ("<=", TokenKind::LessEq),
        ("<>", TokenKind::NotEq),
        ("<", TokenKind::Less),
        ("==", TokenKind::EqEq),
        ("=", TokenKind::Assign),
        ("+-", TokenKind::PlusMinus),
        ("+=", TokenKind::AddAssign),
        ("+", TokenKind::Plus),
        ("-=", TokenKind::SubAssign),
        ("-", TokenKind::Minus),
        ("!=", TokenKind::NotEq),
        ("!", TokenKind::Bang),
    ];
    for (source, kind) in cases {
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, kind, "{source}");
        assert_eq!(token.span.len() as usize, source.len(), "{source}");
        assert_eq!(lexer.position() as usize, source.len(), "{source}");
        assert!(lexer.next_token().unwrap().is_nop());
    }
}

#[test]
fn quoted_string_decodes() {
    let tokens = tokenize("'abc'").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].decoded(), "abc");

    let err = tokenize("'abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnfinishedString);
}

#[test]
fn numeric_literals() {
    for source in ["3.14", ".5", "2e10", "1E-3", "42"] {
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Number, "{source}");
        assert_eq!(token.number(), source.parse::<f64>().ok(), "{source}");
        assert_eq!(lexer.position() as usize, source.len(), "{source}");
    }
}

#[test]
fn number_stops_at_first_non_numeric() {
    let mut lexer = Lexer::new("2.5e+x");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.text, "2.5");
    assert_eq!(lexer.position(), 3);
    assert_eq!(texts("2.5e+x"), vec!["2.5", "e", "+", "x"]);
    // no hexadecimal literals
    assert_eq!(texts("0x1A"), vec!["0", "x1A"]);
}

#[test]
fn sigil_names() {
    let tokens = tokenize("$foo").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::VarName);
    assert_eq!(tokens[0].decoded(), "foo");

    assert_eq!(tokenize("$*").unwrap()[0].kind, TokenKind::VarName);
    let mut lexer = Lexer::new("$*");
    assert_eq!(lexer.next_glob_token().unwrap().text, "$*");

    let err = tokenize("$1").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::UnexpectedCharacterAfterSigil { sigil: '$' }
    );
}

#[test]
fn dataset_selectors() {
    let datasets: Vec<_> = tokenize("@* @+ @3")
        .unwrap()
        .iter()
        .map(|t| t.dataset())
        .collect();
    assert_eq!(
        datasets,
        vec![
            Some(Dataset::All),
            Some(Dataset::New),
            Some(Dataset::Index(3))
        ]
    );
    assert_eq!(
        tokenize("@x").unwrap_err().kind,
        LexErrorKind::UnexpectedCharacterAfterAt
    );
}

#[test]
fn names_by_case() {
    let tokens = tokenize("F Gaussian x_1 _t H2O").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::UpperLetter,
            TokenKind::CamelName,
            TokenKind::LowerName,
            TokenKind::LowerName,
            TokenKind::CamelName,
        ]
    );
    // CamelCase continuation is alphanumeric only
    assert_eq!(texts("Foo_bar"), vec!["Foo", "_bar"]);
    assert_eq!(texts("F_x"), vec!["F", "_x"]);
}

// -- Whole commands --

#[test]
fn end_to_end_define_sequence() {
    let tokens = tokenize("f(x) = $a*Gaussian(%h, $a, $w)").unwrap();
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "lower_case_name \"f\"",
            "(",
            "lower_case_name \"x\"",
            ")",
            "=",
            "$variable_name \"$a\"",
            "*",
            "CamelCaseName \"Gaussian\"",
            "(",
            "%func_name \"%h\"",
            ",",
            "$variable_name \"$a\"",
            ",",
            "$variable_name \"$w\"",
            ")",
        ]
    );
}

#[test]
fn fit_with_range_and_datasets() {
    assert_eq!(
        texts("A = x > 10 and x < 20 in @0, @1; fit 30 @*"),
        vec![
            "A", "=", "x", ">", "10", "and", "x", "<", "20", "in", "@0", ",", "@1", ";", "fit",
            "30", "@*"
        ]
    );
}

#[test]
fn range_dots_after_number() {
    // `10.` is a number, so the dots split differently
    assert_eq!(texts("[10..20]"), vec!["[", "10.", ".20", "]"]);
    assert_eq!(texts("[10 .. 20]"), vec!["[", "10", "..", "20", "]"]);
    assert_eq!(texts("[:20]"), vec!["[", ":", "20", "]"]);
}

#[test]
fn parser_style_guess_command() {
    // guess %g = Gaussian(center=~30) [20:40] in @0
    let mut lexer = Lexer::new("guess %g = Gaussian(center=~30) [20:40] in @0 # peak");
    lexer.expect_raw("guess").unwrap();
    let name = lexer.consume_if(TokenKind::FuncName).unwrap();
    assert_eq!(name.decoded(), "g");
    lexer.expect_kind(TokenKind::Assign).unwrap();
    let ftype = lexer.expect_kind(TokenKind::CamelName).unwrap();
    assert_eq!(ftype.text, "Gaussian");
    lexer.expect_kind(TokenKind::LParen).unwrap();
    assert_eq!(lexer.expect_kind(TokenKind::LowerName).unwrap().text, "center");
    lexer.expect_kind(TokenKind::Assign).unwrap();
    lexer.expect_kind(TokenKind::Tilde).unwrap();
    assert_eq!(
        lexer.expect_kind(TokenKind::Number).unwrap().number(),
        Some(30.0)
    );
    lexer.expect_kind(TokenKind::RParen).unwrap();
    lexer.expect_kind(TokenKind::LBracket).unwrap();
    lexer.expect_kind(TokenKind::Number).unwrap();
    lexer.expect_kind(TokenKind::Colon).unwrap();
    lexer.expect_kind(TokenKind::Number).unwrap();
    lexer.expect_kind(TokenKind::RBracket).unwrap();
    lexer.expect_raw("in").unwrap();
    let ds = lexer.expect_kind(TokenKind::Dataset).unwrap();
    assert_eq!(ds.dataset(), Some(Dataset::Index(0)));
    assert!(lexer.expect_kind(TokenKind::Semicolon).is_err());
    assert!(lexer.next_token().unwrap().is_nop());
}

#[test]
fn optional_production_with_consume_if() {
    // `info` with and without a dataset
    let mut lexer = Lexer::new("info peaks");
    lexer.next_token().unwrap();
    assert!(lexer.consume_if(TokenKind::Dataset).unwrap().is_nop());
    assert_eq!(lexer.next_token().unwrap().text, "peaks");
}

#[test]
fn delete_with_patterns() {
    let mut lexer = Lexer::new("delete $p*, %_*");
    lexer.expect_raw("delete").unwrap();
    let mut names = Vec::new();
    loop {
        names.push(lexer.next_glob_token().unwrap().text);
        if lexer.consume_if(TokenKind::Comma).unwrap().is_nop() {
            break;
        }
    }
    assert_eq!(names, vec!["$p*", "%_*"]);
}

#[test]
fn exec_takes_a_word_and_print_takes_the_line() {
    let mut lexer = Lexer::new("exec C:/scripts/init-2.fit ; print 'x' & y");
    lexer.expect_raw("exec").unwrap();
    assert_eq!(lexer.word_token().unwrap().text, "C:/scripts/init-2.fit");
    lexer.expect_kind(TokenKind::Semicolon).unwrap();
    lexer.expect_raw("print").unwrap();
    let rest = lexer.rest_of_line();
    assert_eq!(rest.kind, TokenKind::Rest);
    assert_eq!(rest.text, "'x' & y");
}

#[test]
fn shell_command_rest_of_command() {
    let mut lexer = Lexer::new("set numeric_format='%.3f'; set verbosity = 2");
    lexer.expect_raw("set").unwrap();
    lexer.expect_kind(TokenKind::LowerName).unwrap();
    lexer.expect_kind(TokenKind::Assign).unwrap();
    // strings pass through unchanged
    let value = lexer.rest_of_command().unwrap();
    assert_eq!(value.kind, TokenKind::String);
    assert_eq!(value.decoded(), "%.3f");
}

#[test]
fn errors_report_near_context() {
    let err = tokenize("F += Gaussian(height=1) & x").unwrap_err();
    assert_eq!(err.offset, 24);
    assert_eq!(
        err.to_string(),
        "at 24, near `height=1) ': unexpected character: &"
    );
}

#[test]
fn tokenize_stops_at_comment() {
    assert_eq!(texts("plot # [0:10]"), vec!["plot"]);
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \t\r\n ").unwrap().is_empty());
}

// -- Properties --

mod properties {
    #![allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::redundant_closure_for_method_calls,
        reason = "Proptest macros generate code with these patterns"
    )]

    use fityk_lexer::{Lexer, TokenKind};
    use proptest::prelude::*;

    /// Text made of fityk-ish characters, including ones that start no token.
    fn fragment_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z0-9_$%@*+\\-=<>!.,;:~?()\\[\\]{}'#& \t]{0,40}")
            .expect("valid regex")
    }

    proptest! {
        #[test]
        fn rest_of_line_never_fails(source in "\\PC{0,60}", skip in 0usize..4) {
            let mut lexer = Lexer::new(&source);
            for _ in 0..skip {
                if lexer.next_token().is_err() {
                    break;
                }
            }
            let rest = lexer.rest_of_line();
            prop_assert_eq!(rest.kind, TokenKind::Rest);
            prop_assert_eq!(rest.span.end as usize, source.len());
        }

        #[test]
        fn spans_stay_inside_input(source in fragment_strategy()) {
            let mut lexer = Lexer::new(&source);
            for _ in 0..=source.len() {
                match lexer.next_token() {
                    Ok(token) => {
                        prop_assert!(token.span.end as usize <= source.len());
                        prop_assert_eq!(&source[token.span.to_range()], token.text);
                        if token.is_nop() {
                            break;
                        }
                    }
                    Err(err) => {
                        prop_assert!(err.offset as usize <= source.len());
                        break;
                    }
                }
            }
        }

        #[test]
        fn push_back_reproduces_token(source in fragment_strategy()) {
            let mut lexer = Lexer::new(&source);
            for _ in 0..=source.len() {
                let Ok(token) = lexer.next_token() else { break };
                lexer.push_back(token);
                let again = lexer.next_token().expect("rescan of a scanned token");
                prop_assert_eq!(token, again);
                if token.is_nop() {
                    break;
                }
            }
        }

        #[test]
        fn peek_agrees_with_next(source in fragment_strategy()) {
            let mut lexer = Lexer::new(&source);
            for _ in 0..=source.len() {
                let Ok(peeked) = lexer.peek_token() else { break };
                let next = lexer.next_token().expect("cached lookahead");
                prop_assert_eq!(peeked, next);
                prop_assert_eq!(lexer.position(), next.span.end);
                if next.is_nop() {
                    break;
                }
            }
        }
    }
}
