use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::Chars;
use lazy_static::lazy_static;
use thiserror::Error;
use crate::util;

#[cfg(test)]
mod tests;

/// Lexeme carried by the synthetic end-of-input token.
pub const EOF_SOURCE: &str = "EndOfFile";

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut keywords = HashMap::new();
        keywords.insert("var", TokenType::Var);
        keywords.insert("null", TokenType::Null);
        keywords
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPos {
    pub line: i32,
    pub column: i32,
}

impl TokenPos {
    pub fn new(line: i32, column: i32) -> TokenPos {
        TokenPos { line, column }
    }

    pub fn begin() -> TokenPos {
        TokenPos::new(1, 1)
    }
}

impl Display for TokenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {} column {}]", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    Identifier,
    Null,
    Number,
    String,

    Var,
    Assign,

    // All of `+ - * / %`; the source tells them apart
    Operator,

    ParenthesisLeft, ParenthesisRight,

    Eof,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Identifier => f.write_str("identifier"),
            TokenType::Null => f.write_str("'null'"),
            TokenType::Number => f.write_str("number"),
            TokenType::String => f.write_str("string"),
            TokenType::Var => f.write_str("'var'"),
            TokenType::Assign => f.write_str("'='"),
            TokenType::Operator => f.write_str("operator"),
            TokenType::ParenthesisLeft => f.write_str("'('"),
            TokenType::ParenthesisRight => f.write_str("')'"),
            TokenType::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    source: String,
    start: TokenPos, end: TokenPos,
}

impl Token {
    pub fn new(token_type: TokenType, source: String, start: TokenPos, end: TokenPos) -> Token {
        Token {
            token_type, source,
            start, end
        }
    }

    pub fn token_type(&self) -> TokenType { self.token_type }
    pub fn source(&self) -> &str { &self.source }
    pub fn start(&self) -> &TokenPos { &self.start }
    pub fn end(&self) -> &TokenPos { &self.end }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.token_type {
            TokenType::Eof => f.write_str("end of input"),
            _ => write!(f, "`{}`", self.source),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("{0} Unexpected character '{1}'")]
    UnexpectedCharacter(TokenPos, char),
}

pub type LexerResult<T> = Result<T, LexerError>;

/// Converts `source` into its full token sequence.
///
/// The result always ends with exactly one [`TokenType::Eof`] token. Scanning
/// stops at the first character no rule accepts; no partial list is returned.
pub fn tokenize(source: &str) -> LexerResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.scan_token()?;
        let is_eof = token.token_type() == TokenType::Eof;
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

pub struct Lexer<'source> {
    input: &'source str,

    chars: Chars<'source>,
    peek_1: Option<char>,

    start_index: usize,
    current_index: usize,

    start_pos: TokenPos,
    current_pos: TokenPos,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Lexer<'source> {
        Lexer {
            input: source,

            chars: source.chars(),
            peek_1: None,

            start_index: 0,
            current_index: 0,

            start_pos: TokenPos::begin(),
            current_pos: TokenPos::begin(),
        }
    }

    /// Scans the next token. Once the input is exhausted, every call returns
    /// another end-of-input token.
    pub fn scan_token(&mut self) -> LexerResult<Token> {
        self.skip_whitespace();
        self.start_index = self.current_index;
        self.start_pos = self.current_pos;

        let c = match self.consume() {
            Some(c) => c,
            None => return Ok(Token::new(TokenType::Eof, String::from(EOF_SOURCE), self.start_pos, self.current_pos)),
        };

        match c {
            '(' => Ok(self.make_token(TokenType::ParenthesisLeft)),
            ')' => Ok(self.make_token(TokenType::ParenthesisRight)),
            '+' | '-' | '*' | '/' | '%' => Ok(self.make_token(TokenType::Operator)),
            '=' => Ok(self.make_token(TokenType::Assign)),

            c if util::is_numeric(c) => Ok(self.scan_number()),
            c if util::is_alphabetic(c) => Ok(self.scan_identifier()),

            _ => Err(LexerError::UnexpectedCharacter(self.start_pos, c)),
        }
    }

    fn scan_number(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !util::is_numeric(c) {
                break;
            }

            self.consume();
        }

        self.make_token(TokenType::Number)
    }

    fn scan_identifier(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !util::is_alphabetic(c) {
                break;
            }

            self.consume();
        }

        let name = &self.input[self.start_index..self.current_index];
        let token_type = KEYWORDS.get(name).copied().unwrap_or(TokenType::Identifier);

        self.make_token(token_type)
    }

    fn make_token(&self, token_type: TokenType) -> Token {
        Token {
            token_type,
            source: self.input[self.start_index..self.current_index].to_owned(),

            start: self.start_pos, end: self.current_pos,
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peek_1.take().or_else(|| self.chars.next())?;
        self.current_index += c.len_utf8();

        if c == '\n' {
            self.current_pos.line += 1;
            self.current_pos.column = 1;
        } else {
            self.current_pos.column += 1;
        }

        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        if self.peek_1.is_none() {
            self.peek_1 = self.chars.next();
        }

        self.peek_1
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !util::is_skippable(c) {
                return;
            }

            self.consume();
        }
    }
}
