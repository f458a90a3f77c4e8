use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based scanner over a source string with one token of lookahead.
///
/// Tokens are produced on demand: `peek` inspects the next token without
/// consuming it and `next` consumes it. The lookahead buffer is a single
/// slot; the grammar never needs more.
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    cached: Option<Token>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.chars().collect(),
            pos: 0,
            cached: None,
            file: file_name,
        }
    }

    /// Returns the next token without consuming it. Repeated calls return
    /// the same token until `next` clears the buffer.
    pub fn peek(&mut self) -> Result<Token, Error> {
        if self.cached.is_none() {
            self.cached = Some(self.advance_current()?);
        }

        Ok(self.cached.clone().unwrap())
    }

    /// Returns and consumes the next token, draining the lookahead buffer
    /// if `peek` filled it.
    pub fn next(&mut self) -> Result<Token, Error> {
        match self.cached.take() {
            Some(token) => Ok(token),
            None => self.advance_current(),
        }
    }

    fn at(&self) -> char {
        self.source[self.pos]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            span: Span {
                start: Position(start as u32, Rc::clone(&self.file)),
                end: Position(self.pos as u32, Rc::clone(&self.file)),
            },
        }
    }

    fn single(&mut self, kind: TokenKind, start: usize) -> Token {
        self.pos += 1;
        self.make_token(kind, start)
    }

    fn advance_current(&mut self) -> Result<Token, Error> {
        while !self.at_eof() && self.at().is_whitespace() {
            self.pos += 1;
        }

        let start = self.pos;

        if self.at_eof() {
            // The cursor stays put; every later call yields EOF again.
            return Ok(self.make_token(TokenKind::EOF, start));
        }

        match self.at() {
            '(' => Ok(self.single(TokenKind::OpenParen, start)),
            ')' => Ok(self.single(TokenKind::CloseParen, start)),
            '{' => Ok(self.single(TokenKind::OpenCurly, start)),
            '}' => Ok(self.single(TokenKind::CloseCurly, start)),
            ':' => Ok(self.single(TokenKind::Colon, start)),
            '!' => Ok(self.single(TokenKind::Not, start)),
            '@' => Ok(self.single(TokenKind::AtSign, start)),
            '^' => Ok(self.single(TokenKind::Caret, start)),
            '&' => Ok(self.single(TokenKind::Ampersand, start)),
            '.' => Ok(self.single(TokenKind::Dot, start)),
            ',' => Ok(self.single(TokenKind::Comma, start)),

            c @ ('+' | '-' | '*' | '/' | '=') => Ok(self.single(TokenKind::Operator(c), start)),

            c if c.is_ascii_digit() => {
                while !self.at_eof() && self.at().is_ascii_digit() {
                    self.pos += 1;
                }

                let literal: String = self.source[start..self.pos].iter().collect();

                // A digit run that does not fit i64 is reported, not wrapped.
                match literal.parse::<i64>() {
                    Ok(value) => Ok(self.make_token(TokenKind::Number(value), start)),
                    Err(_) => Err(Error::new(
                        ErrorImpl::NumberParseError { literal },
                        Position(start as u32, Rc::clone(&self.file)),
                    )),
                }
            }
            c if c.is_alphabetic() => {
                while !self.at_eof() && self.at().is_alphanumeric() {
                    self.pos += 1;
                }

                let fragment: String = self.source[start..self.pos].iter().collect();

                match RESERVED_LOOKUP.get(fragment.as_str()) {
                    Some(kind) => Ok(self.make_token(kind.clone(), start)),
                    None => Ok(self.make_token(TokenKind::Identifier(fragment), start)),
                }
            }
            c => Err(Error::new(
                ErrorImpl::UnsupportedCharacter { character: c },
                Position(start as u32, Rc::clone(&self.file)),
            )),
        }
    }
}

/// Drains a fresh lexer, returning every token including the trailing EOF.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next()?;
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            return Ok(tokens);
        }
    }
}
