/// This file contains scan tests of the public API that verify the tokens produced for small
/// inputs and the errors raised for malformed ones.
use lexspec::{
    CodeBlockAtEof, LexSpecErrorKind, Position, ScanMode, ScannerBuilder, Token, TokenStream,
};

/// Test data for the scan tests.
/// The test data consists of an input string and either the expected tokens (without the final
/// end of input token) or the expected error kind.
#[derive(Debug)]
struct TestData {
    input: &'static str,
    expected: Vec<Token>,
    error: Option<LexSpecErrorKind>,
}

// Macros to easily create a TestData struct.

// Valid input and expected tokens.
macro_rules! td {
    ($input:expr, [$($token:expr),* $(,)?]) => {
        TestData {
            input: $input,
            expected: vec![$($token),*],
            error: None,
        }
    };
}

// Invalid input and expected error kind.
macro_rules! te {
    ($input:expr, $error:expr) => {
        TestData {
            input: $input,
            expected: vec![],
            error: Some($error),
        }
    };
}

fn ident(s: &str) -> Token {
    Token::Ident(s.to_string())
}

fn string(s: &str) -> Token {
    Token::String(s.to_string())
}

fn code(s: &str) -> Token {
    Token::Code(s.to_string())
}

fn pos(line: usize, column: usize, offset: usize) -> Position {
    Position::new(line, column, offset)
}

fn test_data() -> Vec<TestData> {
    vec![
        // Keywords are only recognized as complete identifiers.
        td!("rule", [Token::Rule]),
        td!("parse", [Token::Parse]),
        td!("eof", [Token::Eof]),
        td!("let", [Token::Let]),
        td!("and", [Token::And]),
        td!("ruler", [ident("ruler")]),
        td!("parse_it", [ident("parse_it")]),
        td!("eof'", [ident("eof'")]),
        td!("let1", [ident("let1")]),
        td!("android", [ident("android")]),
        td!("_", [Token::Underscore]),
        td!("_ x", [Token::Underscore, ident("x")]),
        te!(
            "größe",
            LexSpecErrorKind::UnexpectedCharacter {
                character: 'ö',
                position: pos(1, 3, 2),
            }
        ),
        // Character literals
        td!(r"'\uD800'", [Token::Char(0xD800)]),
        td!(r"'\U0000D800'", [Token::Char(0xD800)]),
        td!(r"'\t'", [Token::Char(0x09)]),
        td!(r"'\b'", [Token::Char(0x08)]),
        td!(r"'\r'", [Token::Char(0x0D)]),
        td!(r"'\255'", [Token::Char(0xFF)]),
        td!(r"'\xff'", [Token::Char(0xFF)]),
        td!(r"'€'", [Token::Char(0x20AC)]),
        td!(r"'\u20ac'", [Token::Char(0x20AC)]),
        td!(r"'\Lu'", [Token::UnicodeCategory("Lu".to_string())]),
        td!(r"'\Zs'", [Token::UnicodeCategory("Zs".to_string())]),
        te!(
            r"'\U0001F600'",
            LexSpecErrorKind::UnsupportedSurrogatePair(pos(1, 1, 0))
        ),
        te!(r"'\256'", LexSpecErrorKind::InvalidCharCode(256)),
        te!(r"'\U00110000'", LexSpecErrorKind::InvalidCodePoint(0x110000)),
        // Strings
        td!(r#""a b\n""#, [string("a b\n")]),
        td!(r#""\\ \' \"""#, [string("\\ ' \"")]),
        td!(r#""(* not a comment *)""#, [string("(* not a comment *)")]),
        td!("\"line\r\nbreak\"", [string("line\r\nbreak")]),
        td!("\"con\\\r\ntinued\"", [string("continued")]),
        te!("\"abc", LexSpecErrorKind::UnterminatedString(pos(1, 1, 0))),
        te!(
            "x\n  \"abc\\\"",
            LexSpecErrorKind::UnterminatedString(pos(2, 3, 4))
        ),
        // Comments
        td!("(* (* inner *) outer *)", []),
        td!("(**)(***)x", [ident("x")]),
        td!("(* \"*)\" *) y", [ident("y")]),
        td!("( * )", [Token::LParen, Token::Star, Token::RParen]),
        td!("// line comment\nz", [ident("z")]),
        te!("(* (* *)", LexSpecErrorKind::UnterminatedComment(pos(1, 1, 0))),
        // Action code
        td!(r#"{ let x = "}" in x }"#, [code(r#" let x = "}" in x "#)]),
        td!("{}", [code("")]),
        td!("{{}}", [code("{}")]),
        td!("{ (* } *)", [code(" (* "), Token::Star, Token::RParen]),
        te!("{ {", LexSpecErrorKind::UnterminatedCodeBlock(pos(1, 3, 2))),
        te!(
            "{ \"}",
            LexSpecErrorKind::UnterminatedCodeString(pos(1, 3, 2))
        ),
        // Operators and errors
        td!(
            "a|b.c+d*e?",
            [
                ident("a"),
                Token::Bar,
                ident("b"),
                Token::Dot,
                ident("c"),
                Token::Plus,
                ident("d"),
                Token::Star,
                ident("e"),
                Token::QMark,
            ]
        ),
        te!(
            "a ; b",
            LexSpecErrorKind::UnexpectedCharacter {
                character: ';',
                position: pos(1, 3, 2),
            }
        ),
        te!(
            "}",
            LexSpecErrorKind::UnexpectedCharacter {
                character: '}',
                position: pos(1, 1, 0),
            }
        ),
    ]
}

fn collect(stream: TokenStream) -> lexspec::Result<Vec<Token>> {
    let mut tokens = stream.collect::<lexspec::Result<Vec<_>>>()?;
    assert_eq!(tokens.pop(), Some(Token::EndOfInput));
    Ok(tokens)
}

#[test]
fn scan_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scanner = ScannerBuilder::new().build().unwrap();
    for (index, data) in test_data().into_iter().enumerate() {
        let result = collect(scanner.token_stream(data.input));
        match (&data.error, result) {
            (None, Ok(tokens)) => assert_eq!(
                tokens, data.expected,
                "#{}: input {:?}",
                index, data.input
            ),
            (Some(expected), Err(error)) => assert_eq!(
                error.kind(),
                expected,
                "#{}: input {:?}",
                index,
                data.input
            ),
            (None, Err(error)) => panic!(
                "#{}: input {:?}: unexpected error {}",
                index, data.input, error
            ),
            (Some(expected), Ok(tokens)) => panic!(
                "#{}: input {:?}: expected error {}, got {:?}",
                index, data.input, expected, tokens
            ),
        }
    }
}

#[test]
fn scanning_resumes_after_comment() {
    let scanner = ScannerBuilder::new().build().unwrap();
    let tokens = scanner.tokenize("(* (* inner *) outer *)rule").unwrap();
    assert_eq!(tokens[0].token, Token::Rule);
    assert_eq!(tokens[0].start, pos(1, 24, 23));
    assert_eq!(tokens[1].token, Token::EndOfInput);
}

#[test]
fn unterminated_string_in_comment_names_both_regions() {
    let scanner = ScannerBuilder::new().build().unwrap();
    let error = scanner.tokenize("let (* a \"b *)").unwrap_err();
    assert_eq!(
        *error.kind(),
        LexSpecErrorKind::UnterminatedString(pos(1, 10, 9))
    );
    assert_eq!(error.enclosing(), &[ScanMode::Comment(pos(1, 5, 4))]);
    assert_eq!(
        error.to_string(),
        "End of input in string started at line: 1, column: 10\n  \
         while scanning comment started at line: 1, column: 5"
    );
}

#[test]
fn out_of_range_char_code_names_the_literal() {
    let scanner = ScannerBuilder::new().build().unwrap();
    let error = scanner.tokenize("let x = '\\300'").unwrap_err();
    assert_eq!(*error.kind(), LexSpecErrorKind::InvalidCharCode(300));
    assert_eq!(error.position(), Some(pos(1, 9, 8)));
    assert_eq!(
        error.to_string(),
        "Character code 300 is out of range 0..=255 at line: 1, column: 9"
    );
}

#[test]
fn stream_keeps_reporting_its_error() {
    let scanner = ScannerBuilder::new().build().unwrap();
    let mut stream = scanner.token_stream("rule ;");
    assert_eq!(stream.next_token(), Ok(Token::Rule));
    let error = stream.next_token().unwrap_err();
    assert_eq!(stream.next_token(), Err(error.clone()));
    assert_eq!(stream.peek_n(1), Err(error));
    assert!(stream.next().is_none());
}

#[test]
fn unterminated_code_block_can_end_the_input() {
    let scanner = ScannerBuilder::new()
        .code_block_at_eof(CodeBlockAtEof::EndOfInput)
        .build()
        .unwrap();
    let tokens = scanner.tokenize("rule { x { y }").unwrap();
    assert_eq!(
        tokens.into_iter().map(|t| t.token).collect::<Vec<_>>(),
        vec![Token::Rule, Token::EndOfInput]
    );
}

#[test]
fn deep_nesting_is_limited() {
    let scanner = ScannerBuilder::new().max_nesting_depth(100).build().unwrap();
    let input = format!("{}{}", "{".repeat(101), "}".repeat(101));
    let error = scanner.tokenize(&input).unwrap_err();
    assert_eq!(
        *error.kind(),
        LexSpecErrorKind::NestingTooDeep {
            depth: 100,
            position: pos(1, 101, 100),
        }
    );
    assert_eq!(error.enclosing().len(), 100);
    let input = format!("{}{}", "{".repeat(100), "}".repeat(100));
    let tokens = scanner.tokenize(&input).unwrap();
    assert_eq!(
        tokens[0].token,
        Token::Code(format!("{}{}", "{".repeat(99), "}".repeat(99)))
    );
}
