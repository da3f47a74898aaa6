use thiserror::Error;
use tracing::debug;

use crate::{
    ast::{Argument, Query, Statement, Token},
    lexer::{LexError, Lexer, Position},
    normalize::normalize,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found} at {position}")]
    Unexpected {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("empty field list at {position}")]
    EmptyFieldList { position: Position },

    #[error("empty query")]
    EmptyQuery,
}

/// Recursive-descent parser for the strict statement grammar:
///
/// ```text
/// query      := statement (';' statement)*
/// statement  := IDENT '(' arglist? ')' ('{' fieldlist '}')?
/// arglist    := arg (',' arg)*
/// arg        := (IDENT '=')? value
/// value      := STRING | IDENT
/// fieldlist  := IDENT+
/// ```
///
/// Dotted or slashed values must already be quoted; run [`normalize`] first
/// or use [`parse_lenient`].
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(expected.describe()));
        }
        self.advance()
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Unexpected {
            expected: expected.into(),
            found: self.current_token.describe(),
            position: self.current_position,
        }
    }

    fn take_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.current_token {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// Parses the whole batch. Any malformed statement fails the entire query.
    ///
    /// Empty statements (`;;` or a trailing `;`) are skipped.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let mut statements = Vec::new();

        loop {
            while self.check(&Token::Semicolon) {
                self.advance()?;
            }
            if self.check(&Token::Eof) {
                break;
            }

            statements.push(self.parse_statement()?);

            match self.current_token {
                Token::Semicolon => self.advance()?,
                Token::Eof => break,
                _ => return Err(self.unexpected("';' or end of input")),
            }
        }

        if statements.is_empty() {
            return Err(ParseError::EmptyQuery);
        }
        Ok(Query { statements })
    }

    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let operation = self.take_identifier("operation name")?;
        let args = self.parse_arguments()?;
        let fields = if self.check(&Token::LBrace) {
            self.parse_fields()?
        } else {
            Vec::new()
        };

        Ok(Statement {
            operation,
            args,
            fields,
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        self.expect(Token::LParen)?;

        let mut args = Vec::new();
        if self.check(&Token::RParen) {
            self.advance()?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_argument()?);
            match self.current_token {
                Token::Comma => self.advance()?,
                Token::RParen => {
                    self.advance()?;
                    return Ok(args);
                }
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        match std::mem::replace(&mut self.current_token, Token::Eof) {
            Token::Identifier(word) => {
                self.advance()?;
                if self.check(&Token::Equals) {
                    self.advance()?;
                    let value = self.parse_value()?;
                    Ok(Argument::keyed(word, value))
                } else {
                    Ok(Argument::positional(word))
                }
            }
            Token::String(s) => {
                self.advance()?;
                Ok(Argument::positional(s))
            }
            other => {
                self.current_token = other;
                Err(self.unexpected("argument"))
            }
        }
    }

    fn parse_value(&mut self) -> Result<String, ParseError> {
        match std::mem::replace(&mut self.current_token, Token::Eof) {
            Token::Identifier(s) | Token::String(s) => {
                self.advance()?;
                Ok(s)
            }
            other => {
                self.current_token = other;
                Err(self.unexpected("argument value"))
            }
        }
    }

    fn parse_fields(&mut self) -> Result<Vec<String>, ParseError> {
        let open = self.current_position;
        self.expect(Token::LBrace)?;

        let mut fields = Vec::new();
        while let Token::Identifier(name) = &self.current_token {
            fields.push(name.clone());
            self.advance()?;
        }

        if !self.check(&Token::RBrace) {
            return Err(self.unexpected("field name or '}'"));
        }
        if fields.is_empty() {
            return Err(ParseError::EmptyFieldList { position: open });
        }
        self.advance()?;
        Ok(fields)
    }
}

/// Parses already-normalized query text.
pub fn parse(text: &str) -> Result<Query, ParseError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    parser.parse_query()
}

/// Normalizes legacy dotted/slashed arguments, then parses.
pub fn parse_lenient(raw: &str) -> Result<Query, ParseError> {
    let normalized = normalize(raw);
    debug!(raw, normalized = %normalized, "normalized query");
    let query = parse(&normalized)?;
    debug!(statements = query.len(), "parsed query");
    Ok(query)
}
