use pretty_assertions::assert_eq;
use super::*;

fn types(source: &str) -> Vec<TokenType> {
    tokenize(source).expect("source should tokenize").iter().map(Token::token_type).collect()
}

fn sources(source: &str) -> Vec<String> {
    tokenize(source).expect("source should tokenize").iter().map(|token| token.source().to_owned()).collect()
}

#[test]
fn empty_input_yields_only_eof() {
    let tokens = tokenize("").unwrap();

    assert_eq!(vec![Token::new(TokenType::Eof, String::from(EOF_SOURCE), TokenPos::begin(), TokenPos::begin())], tokens);
}

#[test]
fn whitespace_only_input_yields_only_eof() {
    assert_eq!(vec![TokenType::Eof], types(" \t\n  \n"));
}

#[test]
fn single_character_tokens() {
    assert_eq!(vec![
        TokenType::ParenthesisLeft, TokenType::ParenthesisRight,
        TokenType::Operator, TokenType::Operator, TokenType::Operator, TokenType::Operator, TokenType::Operator,
        TokenType::Assign,
        TokenType::Eof,
    ], types("()+-*/%="));
}

#[test]
fn operators_are_never_combined() {
    assert_eq!(vec!["*", "*", "-", "-", "=", "=", EOF_SOURCE], sources("**--=="));
}

#[test]
fn digit_runs_are_maximal() {
    assert_eq!(vec!["12345", "6", EOF_SOURCE], sources("12345 6"));
    assert_eq!(vec![TokenType::Number, TokenType::Number, TokenType::Eof], types("12345 6"));
}

#[test]
fn leading_minus_is_a_separate_operator() {
    assert_eq!(vec![TokenType::Operator, TokenType::Number, TokenType::Eof], types("-42"));
    assert_eq!(vec!["-", "42", EOF_SOURCE], sources("-42"));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(vec![
        TokenType::Var, TokenType::Identifier, TokenType::Assign, TokenType::Null, TokenType::Eof,
    ], types("var foo = null"));

    // Only exact matches are keywords
    assert_eq!(vec![TokenType::Identifier, TokenType::Identifier, TokenType::Identifier, TokenType::Eof],
               types("variable nullable Var"));
}

#[test]
fn letters_and_digits_split_into_separate_tokens() {
    assert_eq!(vec!["abc", "123", "def", EOF_SOURCE], sources("abc123def"));
    assert_eq!(vec![TokenType::Identifier, TokenType::Number, TokenType::Identifier, TokenType::Eof],
               types("abc123def"));
}

#[test]
fn unexpected_character_reports_character_and_position() {
    let error = tokenize("1 + $").unwrap_err();

    assert_eq!(LexerError::UnexpectedCharacter(TokenPos::new(1, 5), '$'), error);
    assert_eq!("[line 1 column 5] Unexpected character '$'", error.to_string());
}

#[test]
fn rejects_non_ascii_and_other_punctuation() {
    assert_eq!(Err(LexerError::UnexpectedCharacter(TokenPos::new(1, 1), 'é')), tokenize("é"));
    assert_eq!(Err(LexerError::UnexpectedCharacter(TokenPos::new(1, 2), '_')), tokenize("a_b"));
    assert_eq!(Err(LexerError::UnexpectedCharacter(TokenPos::new(1, 2), '.')), tokenize("1.5"));
    assert_eq!(Err(LexerError::UnexpectedCharacter(TokenPos::new(1, 2), '\r')), tokenize("1\r\n"));
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("a\n  bc").unwrap();

    assert_eq!(TokenPos::new(1, 1), *tokens[0].start());
    assert_eq!(TokenPos::new(1, 2), *tokens[0].end());
    assert_eq!(TokenPos::new(2, 3), *tokens[1].start());
    assert_eq!(TokenPos::new(2, 5), *tokens[1].end());
}

#[test]
fn scanner_keeps_returning_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(TokenType::Identifier, lexer.scan_token().unwrap().token_type());
    assert_eq!(TokenType::Eof, lexer.scan_token().unwrap().token_type());
    assert_eq!(TokenType::Eof, lexer.scan_token().unwrap().token_type());
}

#[test]
fn token_display() {
    let tokens = tokenize("foo").unwrap();

    assert_eq!("`foo`", tokens[0].to_string());
    assert_eq!("end of input", tokens[1].to_string());
}
