use pylex_base::source_file::SourceFile;

use super::Tokenizer;
use crate::{
    error::{Error, IndentationErrorKind, NumberErrorKind},
    token::TokenKind,
};

fn tokenize(source: &str) -> Result<Vec<(TokenKind, String)>, Error> {
    let mut tokens = Vec::new();

    Tokenizer::new(SourceFile::in_memory("test.py", source))
        .analyze(|token| tokens.push((token.kind(), token.lexeme().to_string())))?;

    Ok(tokens)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|(kind, _)| kind)
        .collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|(_, lexeme)| lexeme)
        .collect()
}

#[test]
fn reserved_words() {
    let source = "if else for while def class return import from try except with in is";

    assert_eq!(kinds(source), vec![TokenKind::ReservedWord; 14]);
    assert_eq!(lexemes(source).join(" "), source);
}

#[test]
fn refined_reserved_words() {
    assert_eq!(kinds("True False"), vec![TokenKind::Boolean; 2]);
    assert_eq!(kinds("None"), vec![TokenKind::None]);
    assert_eq!(kinds("and or not"), vec![TokenKind::LogicalOp; 3]);
}

#[test]
fn built_in_functions() {
    assert_eq!(kinds("print range"), vec![TokenKind::BuiltInFunction; 2]);
}

#[test]
fn identifiers() {
    let source = "x _private camelCase snake_case var1 héllo";

    assert_eq!(kinds(source), vec![TokenKind::Identifier; 6]);
    assert_eq!(lexemes(source).join(" "), source);

    // case sensitive
    assert_eq!(kinds("If true Print"), vec![TokenKind::Identifier; 3]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("0 42 1234567890"), vec![TokenKind::Integer; 3]);
    assert_eq!(kinds("3.14 0.5"), vec![TokenKind::Float; 2]);
    assert_eq!(
        tokenize("1e5 2.5E-3 1.23e+10").unwrap(),
        vec![
            (TokenKind::Scientific, "1e5".to_string()),
            (TokenKind::Scientific, "2.5E-3".to_string()),
            (TokenKind::Scientific, "1.23e+10".to_string()),
        ]
    );
}

#[test]
fn number_followed_by_a_letter() {
    let error = tokenize("123abc").unwrap_err().into_invalid_number().unwrap();

    assert_eq!(error.kind, NumberErrorKind::TrailingLetter);
    assert_eq!(error.span.str(), "123a");
}

#[test]
fn incomplete_decimal() {
    let error = tokenize("123.").unwrap_err().into_invalid_number().unwrap();

    assert_eq!(error.kind, NumberErrorKind::IncompleteDecimal);
    assert_eq!(error.span.str(), "123.");

    let error = tokenize("x = 1.a").unwrap_err().into_invalid_number().unwrap();
    assert_eq!(error.kind, NumberErrorKind::IncompleteDecimal);
}

#[test]
fn incomplete_exponent() {
    for (source, lexeme) in [("123e", "123e"), ("1e+", "1e+"), ("2.5E- 1", "2.5E-")] {
        let error = tokenize(source).unwrap_err().into_invalid_number().unwrap();

        assert_eq!(error.kind, NumberErrorKind::IncompleteExponent, "{source}");
        assert_eq!(error.span.str(), lexeme);
    }
}

#[test]
fn strings() {
    assert_eq!(
        tokenize("'hello' \"world\"").unwrap(),
        vec![
            (TokenKind::String, "'hello'".to_string()),
            (TokenKind::String, "\"world\"".to_string()),
        ]
    );
}

#[test]
fn empty_strings() {
    assert_eq!(lexemes("'' \"\" '''''' \"\"\"\"\"\""), vec![
        "''",
        "\"\"",
        "''''''",
        "\"\"\"\"\"\""
    ]);
    assert_eq!(kinds("'' \"\""), vec![TokenKind::String; 2]);
}

#[test]
fn escaped_quote_does_not_close_the_string() {
    assert_eq!(lexemes(r"'it\'s' x"), vec![r"'it\'s'", "x"]);
    assert_eq!(lexemes(r#""say \"hi\"""#), vec![r#""say \"hi\"""#]);
}

#[test]
fn triple_quoted_string_spans_lines() {
    assert_eq!(
        tokenize("'''line one\nline two''' x").unwrap(),
        vec![
            (TokenKind::String, "'''line one\nline two'''".to_string()),
            (TokenKind::Identifier, "x".to_string()),
        ]
    );
    assert_eq!(lexemes("\"\"\"doc\"\"\""), vec!["\"\"\"doc\"\"\""]);
}

#[test]
fn unterminated_string() {
    let error = tokenize("'hello")
        .unwrap_err()
        .into_unterminated_string()
        .unwrap();
    assert_eq!(error.span.str(), "'hello");

    // a single-quoted string cannot cross a line break
    assert!(tokenize("x = 'hello\nworld'")
        .unwrap_err()
        .is_unterminated_string());

    assert!(tokenize("'''never closed\n")
        .unwrap_err()
        .is_unterminated_string());
}

#[test]
fn operators() {
    let source = "+ - * / % ** // == != < > <= >= = += -= *= /= !";

    assert_eq!(lexemes(source).join(" "), source);
    assert_eq!(kinds(source), vec![
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::ArithmeticOp,
        TokenKind::RelationalOp,
        TokenKind::RelationalOp,
        TokenKind::RelationalOp,
        TokenKind::RelationalOp,
        TokenKind::RelationalOp,
        TokenKind::RelationalOp,
        TokenKind::AssignmentOp,
        TokenKind::AssignmentOp,
        TokenKind::AssignmentOp,
        TokenKind::AssignmentOp,
        TokenKind::AssignmentOp,
        TokenKind::LogicalOp,
    ]);
}

#[test]
fn operator_pairs_take_priority() {
    assert_eq!(lexemes("a<=b"), vec!["a", "<=", "b"]);
    assert_eq!(kinds("x=-1"), vec![
        TokenKind::Identifier,
        TokenKind::AssignmentOp,
        TokenKind::ArithmeticOp,
        TokenKind::Integer,
    ]);
    assert_eq!(lexemes("!x"), vec!["!", "x"]);
}

#[test]
fn delimiters() {
    assert_eq!(kinds("( ) [ ] { } , . ;"), vec![
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Semicolon,
    ]);
    assert_eq!(lexemes("x.y"), vec!["x", ".", "y"]);
}

#[test]
fn comments() {
    assert_eq!(
        tokenize("# a comment").unwrap(),
        vec![(TokenKind::Comment, "# a comment".to_string())]
    );
    assert_eq!(kinds("x = 5  # inline comment"), vec![
        TokenKind::Identifier,
        TokenKind::AssignmentOp,
        TokenKind::Integer,
        TokenKind::Comment,
    ]);
    assert_eq!(lexemes("# first\r\n# second"), vec!["# first", "# second"]);
}

#[test]
fn empty_and_whitespace_only_sources() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \t\n  \r  ").unwrap().is_empty());
}

#[test]
fn invalid_symbol() {
    let error = tokenize("x @ y").unwrap_err().into_invalid_symbol().unwrap();

    assert_eq!(error.span.str(), "@");
    assert_eq!(error.span.start_location().column, 3);
}

#[test]
fn tokens_before_an_error_are_kept() {
    let mut tokens = Vec::new();
    let result = Tokenizer::new(SourceFile::in_memory("test.py", "x = 1 $ y"))
        .analyze(|token| tokens.push(token.lexeme().to_string()));

    assert!(result.unwrap_err().is_invalid_symbol());
    assert_eq!(tokens, vec!["x", "=", "1"]);
}

#[test]
fn error_reports_its_line() {
    let error = tokenize("x = 1\ny = 12a").unwrap_err();
    let location = error.span().start_location();

    assert_eq!(location.line, 2);
    assert_eq!(location.column, 5);
}

#[test]
fn function_call() {
    assert_eq!(kinds("print(\"hi\", x)"), vec![
        TokenKind::BuiltInFunction,
        TokenKind::LeftParenthesis,
        TokenKind::String,
        TokenKind::Comma,
        TokenKind::Identifier,
        TokenKind::RightParenthesis,
    ]);
}

#[test]
fn list_literal() {
    assert_eq!(kinds("[1, 2.5, 'a']"), vec![
        TokenKind::LeftBracket,
        TokenKind::Integer,
        TokenKind::Comma,
        TokenKind::Float,
        TokenKind::Comma,
        TokenKind::String,
        TokenKind::RightBracket,
    ]);
}

#[test]
fn colon_at_the_end_of_the_input() {
    assert_eq!(kinds("if x == 5:"), vec![
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::RelationalOp,
        TokenKind::Integer,
        TokenKind::Colon,
    ]);
    assert_eq!(lexemes("for i in range(10):"), vec![
        "for", "i", "in", "range", "(", "10", ")", ":"
    ]);
    assert_eq!(kinds("for i in range(10):")[3], TokenKind::BuiltInFunction);

    // the final line terminator ends the input
    assert!(tokenize("if x:\n").is_ok());
}

#[test]
fn colon_followed_by_an_empty_line() {
    for source in ["if x:\n\n", "if x:\r\n", "if x:\r\r\n", "if x:\n\n\n"] {
        let error = tokenize(source)
            .unwrap_err()
            .into_indentation()
            .unwrap();

        assert_eq!(
            error.kind,
            IndentationErrorKind::UnexpectedWidth { width: 0 },
            "{source:?}"
        );
    }
}

#[test]
fn colon_opens_an_indented_block() {
    assert_eq!(lexemes("if x:\n    y = 1\n"), vec![
        "if", "x", ":", "y", "=", "1"
    ]);
    assert_eq!(lexemes("if x:\r\n    y = 1\r\n"), vec![
        "if", "x", ":", "y", "=", "1"
    ]);
}

#[test]
fn colon_without_line_break() {
    let error = tokenize("while x > 0: x -= 1")
        .unwrap_err()
        .into_indentation()
        .unwrap();

    assert_eq!(error.kind, IndentationErrorKind::MissingNewline);
    assert_eq!(error.span.str(), ":");
    assert_eq!(error.line(), 1);
}

#[test]
fn colon_followed_by_wrong_indentation() {
    let error = tokenize("if x:\n  y = 1")
        .unwrap_err()
        .into_indentation()
        .unwrap();
    assert_eq!(error.kind, IndentationErrorKind::UnexpectedWidth { width: 2 });
    assert_eq!(error.line(), 2);

    // each whitespace character counts once
    let error = tokenize("if x:\n\ty = 1")
        .unwrap_err()
        .into_indentation()
        .unwrap();
    assert_eq!(error.kind, IndentationErrorKind::UnexpectedWidth { width: 1 });

    let error = tokenize("if x:\ny = 1")
        .unwrap_err()
        .into_indentation()
        .unwrap();
    assert_eq!(error.kind, IndentationErrorKind::UnexpectedWidth { width: 0 });
}

#[test]
fn multiple_lines() {
    assert_eq!(lexemes("x = 1\ny = 2\n"), vec!["x", "=", "1", "y", "=", "2"]);
}

#[test]
fn next_token_yields_none_at_the_end() {
    let mut tokenizer = Tokenizer::new(SourceFile::in_memory("test.py", "x"));

    assert_eq!(tokenizer.next_token().unwrap().unwrap().lexeme(), "x");
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.next_token(), Ok(None));
}
