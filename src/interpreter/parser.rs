use thiserror::Error;
use crate::interpreter::ast::{BinaryOperator, Node, Program};
use crate::interpreter::lexer::{self, LexerError, Token, TokenPos, TokenType};
use crate::util::ensure_sufficient_stack;


#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("{} Expected {expected}, got {found}", .found.start())]
    ExpectedToken {
        expected: TokenType,
        found: Token,
    },
    #[error("{pos} Unexpected token '{lexeme}' of type {token_type}")]
    UnexpectedToken {
        token_type: TokenType,
        lexeme: String,
        pos: TokenPos,
    },
    #[error("{pos} Failed to parse number literal '{lexeme}'")]
    InvalidNumber {
        lexeme: String,
        pos: TokenPos,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes and parses `source` into a single [`Program`].
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = lexer::tokenize(source)?;
    Parser::new(tokens).parse()
}

/// Recursive-descent parser over a fully tokenized source, one token of
/// lookahead, no backtracking.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Takes tokens as produced by [`lexer::tokenize`]. An end-of-input token
    /// is appended if the sequence lacks one; tokens after an earlier one are
    /// rejected by [`Parser::parse`].
    pub fn new(mut tokens: Vec<Token>) -> Parser {
        if tokens.last().map(Token::token_type) != Some(TokenType::Eof) {
            let pos = tokens.last().map(|token| *token.end()).unwrap_or_else(TokenPos::begin);
            tokens.push(Token::new(TokenType::Eof, String::from(lexer::EOF_SOURCE), pos, pos));
        }

        Parser {
            tokens,
            position: 0,
        }
    }

    pub fn parse(mut self) -> ParseResult<Program> {
        let mut body = Vec::new();

        while !self.is_eof() {
            body.push(self.parse_statement()?);
        }

        self.expect(TokenType::Eof)?;

        if let Some(trailing) = self.tokens.get(self.position) {
            return Err(ParseError::ExpectedToken { expected: TokenType::Eof, found: trailing.clone() });
        }

        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    fn parse_statement(&mut self) -> ParseResult<Node> {
        // Statements are only expressions for now
        self.parse_expression()
    }

    fn parse_expression(&mut self) -> ParseResult<Node> {
        ensure_sufficient_stack(|| self.parse_additive())
    }

    fn parse_additive(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_multiplicative()?;

        while let Some(operator) = self.match_operator(BinaryOperator::is_additive) {
            let right = self.parse_multiplicative()?;

            expr = Node::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_primary()?;

        while let Some(operator) = self.match_operator(BinaryOperator::is_multiplicative) {
            let right = self.parse_primary()?;

            expr = Node::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Node> {
        if self.matches(TokenType::Identifier) {
            return Ok(Node::Identifier(self.previous().source().to_owned()));
        } else if self.matches(TokenType::Null) {
            return Ok(Node::NullLiteral);
        } else if self.matches(TokenType::Number) {
            let number = self.previous();

            return number.source().parse::<f64>()
                .map(Node::NumericLiteral)
                .map_err(|_| ParseError::InvalidNumber { lexeme: number.source().to_owned(), pos: *number.start() });
        } else if self.matches(TokenType::ParenthesisLeft) {
            let expr = self.parse_expression()?;
            self.expect(TokenType::ParenthesisRight)?;

            return Ok(expr);
        }

        let token = self.current();

        Err(ParseError::UnexpectedToken {
            token_type: token.token_type(),
            lexeme: token.source().to_owned(),
            pos: *token.start(),
        })
    }

    fn match_operator(&mut self, tier: fn(&BinaryOperator) -> bool) -> Option<BinaryOperator> {
        if !self.check(TokenType::Operator) {
            return None;
        }

        let operator = BinaryOperator::from_source(self.current().source()).filter(tier)?;
        self.consume();

        Some(operator)
    }

    fn current(&self) -> &Token {
        // Clamped so the end-of-input token stays visible once consumed
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    fn consume(&mut self) -> &Token {
        if self.position < self.tokens.len() {
            self.position += 1;
        }

        self.previous()
    }

    fn expect(&mut self, token_type: TokenType) -> ParseResult<&Token> {
        if self.check(token_type) {
            return Ok(self.consume());
        }

        Err(ParseError::ExpectedToken { expected: token_type, found: self.current().clone() })
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.current().token_type() == token_type
    }

    fn is_eof(&self) -> bool {
        self.check(TokenType::Eof)
    }
}
