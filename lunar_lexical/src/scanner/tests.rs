use lunar_base::{
    diagnostic::Storage,
    source_file::{Location, SourceFile},
};
use lunar_test::input::Input;
use proptest::{prelude::Arbitrary, prop_assert, proptest, test_runner::TestCaseError};

use super::Scanner;
use crate::{
    error::{self, InvalidNumberReason},
    token::{
        self,
        tests::{scan, Token as TokenInput},
        NumberValue, ReservedWord, SymbolKind, Token,
    },
};

fn scan_single(source: &str) -> Token {
    let token_stream = scan(source).unwrap();
    assert_eq!(token_stream.len(), 2, "expected one token in {token_stream:?}");
    token_stream[0].clone()
}

fn number(source: &str) -> NumberValue { scan_single(source).into_number().unwrap().value }

fn symbols(source: &str) -> Vec<SymbolKind> {
    scan(source)
        .unwrap()
        .significant_tokens()
        .iter()
        .map(|token| token.as_symbol().unwrap().symbol)
        .collect()
}

fn invalid_number(source: &str) -> InvalidNumberReason {
    scan(source)
        .unwrap_err()
        .into_invalid_number()
        .unwrap()
        .reason
}

#[test]
fn integral_literals() {
    assert_eq!(number("123"), NumberValue::Integer(123));
    assert_eq!(number("0"), NumberValue::Integer(0));
    assert_eq!(number("007"), NumberValue::Integer(7));
    assert_eq!(number("0x1F"), NumberValue::Integer(31));
    assert_eq!(number("0XfF"), NumberValue::Integer(255));
    assert_eq!(
        number("18446744073709551615"),
        NumberValue::Integer(u64::MAX)
    );
}

#[test]
fn floating_literals() {
    assert_eq!(number("1.5"), NumberValue::Float(1.5));
    assert_eq!(number(".5"), NumberValue::Float(0.5));
    assert_eq!(number("3."), NumberValue::Float(3.0));
    assert_eq!(number("1e10"), NumberValue::Float(1e10));
    assert_eq!(number("1e+5"), NumberValue::Float(1e5));
    assert_eq!(number("2.5E-3"), NumberValue::Float(2.5e-3));

    // too large for 64 bits
    assert_eq!(
        number("18446744073709551616"),
        NumberValue::Float(18_446_744_073_709_551_616.0)
    );
}

#[test]
fn sign_after_exponent_digits_ends_the_number() {
    let token_stream = scan("1e5-3").unwrap();
    let tokens = token_stream.significant_tokens();

    assert_eq!(tokens.len(), 3);
    assert_eq!(
        tokens[0].as_number().unwrap().value,
        NumberValue::Float(1e5)
    );
    assert_eq!(tokens[1].as_symbol().unwrap().symbol, SymbolKind::Minus);
    assert_eq!(
        tokens[2].as_number().unwrap().value,
        NumberValue::Integer(3)
    );
}

#[test]
fn malformed_numbers() {
    assert_eq!(
        invalid_number("1.2.3"),
        InvalidNumberReason::MultipleDecimalPoints
    );
    assert_eq!(invalid_number("12ab"), InvalidNumberReason::UnexpectedHexDigit);
    assert_eq!(invalid_number("0x1.5"), InvalidNumberReason::DecimalPointInHex);
    assert_eq!(
        invalid_number("1e5.0"),
        InvalidNumberReason::DecimalPointInExponent
    );
    assert_eq!(invalid_number("1e2e3"), InvalidNumberReason::MultipleExponents);
    assert_eq!(invalid_number("1e"), InvalidNumberReason::MissingExponentDigits);
    assert_eq!(
        invalid_number("1e+ 2"),
        InvalidNumberReason::MissingExponentDigits
    );
    assert_eq!(invalid_number("0x"), InvalidNumberReason::MissingHexDigits);
    assert_eq!(
        invalid_number("0x10000000000000000"),
        InvalidNumberReason::Overflow
    );
}

#[test]
fn invalid_number_span_ends_at_offending_character() {
    let error = scan("x = 1.2.3").unwrap_err().into_invalid_number().unwrap();

    assert_eq!(error.span.str(), "1.2.");
    assert_eq!(error.span.start_location(), Location { line: 1, column: 5 });
}

#[test]
fn string_literals() {
    let string = scan_single("'ab\\nc'").into_string().unwrap();
    assert_eq!(string.value, "ab\nc");
    assert_eq!(string.span.str(), "'ab\\nc'");

    let string = scan_single(r#""it's \"quoted\" \\ here""#).into_string().unwrap();
    assert_eq!(string.value, r#"it's "quoted" \ here"#);

    let string = scan_single(r#"'say "hi"'"#).into_string().unwrap();
    assert_eq!(string.value, r#"say "hi""#);

    let string = scan_single("\"\"").into_string().unwrap();
    assert_eq!(string.value, "");
}

#[test]
fn invalid_escape() {
    let error = scan("'\\q'").unwrap_err().into_invalid_escape().unwrap();
    assert_eq!(error.span.str(), "\\q");
}

#[test]
fn unterminated_strings() {
    let error = scan("x = 'abc").unwrap_err().into_unterminated_string().unwrap();
    assert_eq!(error.span.str(), "'abc");

    // the closing quote is escaped
    assert!(scan("\"abc\\\"").unwrap_err().is_unterminated_string());

    // the backslash is the very last character
    assert!(scan("'abc\\").unwrap_err().is_unterminated_string());

    // the other kind of quote doesn't close the literal
    assert!(scan("'abc\"").unwrap_err().is_unterminated_string());
}

#[test]
fn names_and_reserved_words() {
    assert_eq!(scan_single("foo").into_name().unwrap().identifier(), "foo");
    assert_eq!(
        scan_single("_foo_1").into_name().unwrap().identifier(),
        "_foo_1"
    );
    assert_eq!(
        scan_single("local").into_reserved().unwrap().word,
        ReservedWord::Local
    );
    assert_eq!(scan_single("Local").into_name().unwrap().identifier(), "Local");
    assert_eq!(
        scan_single("elseif").into_reserved().unwrap().word,
        ReservedWord::ElseIf
    );
    assert_eq!(scan_single("ends").into_name().unwrap().identifier(), "ends");
}

#[test]
fn comments_produce_no_tokens() {
    let token_stream = scan("-- comment\nx").unwrap();

    assert_eq!(token_stream.len(), 3);
    assert!(token_stream[0].is_end_of_line());
    assert_eq!(token_stream[1].as_name().unwrap().identifier(), "x");
    assert!(token_stream[2].is_end_of_file());

    // a comment on the last line
    let token_stream = scan("x -- trailing").unwrap();
    assert_eq!(token_stream.len(), 2);
    assert!(token_stream[0].is_name());
}

#[test]
fn maximal_munch() {
    assert_eq!(symbols("=="), vec![SymbolKind::Equal]);
    assert_eq!(symbols("="), vec![SymbolKind::Assign]);
    assert_eq!(symbols("~="), vec![SymbolKind::NotEqual]);
    assert_eq!(symbols(".."), vec![SymbolKind::Concat]);
    assert_eq!(symbols("..."), vec![SymbolKind::Ellipsis]);
    assert_eq!(symbols("."), vec![SymbolKind::Dot]);
    assert_eq!(symbols(">="), vec![SymbolKind::GreaterEqual]);
    assert_eq!(symbols("<="), vec![SymbolKind::LessEqual]);
    assert_eq!(symbols("<"), vec![SymbolKind::Less]);
    assert_eq!(symbols(">"), vec![SymbolKind::Greater]);
    assert_eq!(symbols("-"), vec![SymbolKind::Minus]);

    assert_eq!(
        symbols("===...."),
        vec![SymbolKind::Equal, SymbolKind::Assign, SymbolKind::Ellipsis, SymbolKind::Dot]
    );
    assert_eq!(
        symbols("+*/%^#(){}[];:,"),
        vec![
            SymbolKind::Add,
            SymbolKind::Multiply,
            SymbolKind::Divide,
            SymbolKind::Mod,
            SymbolKind::Power,
            SymbolKind::Length,
            SymbolKind::LeftParen,
            SymbolKind::RightParen,
            SymbolKind::LeftBrace,
            SymbolKind::RightBrace,
            SymbolKind::LeftBracket,
            SymbolKind::RightBracket,
            SymbolKind::Semicolon,
            SymbolKind::Colon,
            SymbolKind::Comma,
        ]
    );
}

#[test]
fn invalid_tokens() {
    let error = scan("~").unwrap_err().into_invalid_token().unwrap();
    assert_eq!(error.span.str(), "~");

    let error = scan("a ~ b").unwrap_err().into_invalid_token().unwrap();
    assert_eq!(error.span.start_location(), Location { line: 1, column: 3 });

    let error = scan("x\n  @").unwrap_err().into_invalid_token().unwrap();
    assert_eq!(error.span.str(), "@");
    assert_eq!(error.span.start_location(), Location { line: 2, column: 3 });

    // names are ASCII only
    assert!(scan("é").unwrap_err().is_invalid_token());
    assert!(scan("$").unwrap_err().is_invalid_token());
}

#[test]
fn error_display_points_at_the_source() {
    let error = scan("local x = ~").unwrap_err();
    let display = error.to_string();

    assert!(display.contains("invalid token `~`"));
    assert!(display.contains(":1:11"));
    assert!(display.contains("local x = ~"));
}

#[test]
fn cursor_moves_one_lexeme_per_token() {
    let source_file = SourceFile::temp("  foo..bar\n").unwrap();
    let storage: Storage<error::Error> = Storage::new();
    let mut scanner = Scanner::new(&source_file);

    assert_eq!((scanner.start(), scanner.current()), (0, 0));

    assert!(scanner.scan_token(&storage).unwrap().is_name());
    assert_eq!((scanner.start(), scanner.current()), (2, 5));

    assert!(scanner.scan_token(&storage).unwrap().is_symbol());
    assert_eq!((scanner.start(), scanner.current()), (5, 7));

    assert!(scanner.scan_token(&storage).unwrap().is_name());
    assert!(scanner.scan_token(&storage).unwrap().is_end_of_line());
    assert!(scanner.is_at_end());

    assert_eq!(
        scanner.scan_token(&storage),
        Err(token::Error::EndOfSource)
    );
    assert!(storage.as_vec().is_empty());
}

#[test]
fn scan_token_returns_comments() {
    let source_file = SourceFile::temp("-- note\n").unwrap();
    let storage: Storage<error::Error> = Storage::new();
    let mut scanner = Scanner::new(&source_file);

    let comment = scanner.scan_token(&storage).unwrap().into_comment().unwrap();
    assert_eq!(comment.span.str(), "-- note");
    assert!(scanner.scan_token(&storage).unwrap().is_end_of_line());
}

#[test]
fn trailing_white_spaces() {
    let token_stream = scan("x \t ").unwrap();

    assert_eq!(token_stream.len(), 2);
    assert_eq!(token_stream[1].span().start(), 4);
    assert_eq!(token_stream[1].span().str(), "");
}

proptest! {
    #[test]
    fn token_test(
        input in TokenInput::arbitrary()
    ) {
        let source = input.to_string();
        let source_file = SourceFile::temp(&source)?;
        let storage: Storage<error::Error> = Storage::new();
        let mut scanner = Scanner::new(&source_file);

        let token = scanner.scan_token(&storage)?;
        input.assert(&token)?;

        prop_assert!(storage.as_vec().is_empty());
        prop_assert!(scanner.is_at_end());
    }
}

proptest! {
    #[test]
    fn space_separated_tokens(
        inputs in proptest::collection::vec(TokenInput::arbitrary(), 0..16)
    ) {
        let source = inputs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let token_stream = scan(&source).map_err(|error| TestCaseError::fail(error.to_string()))?;

        inputs.as_slice().assert(token_stream.significant_tokens())?;
    }
}
