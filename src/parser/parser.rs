//! Parser state and token-expectation helpers.
//!
//! The parser owns the lexer and pulls tokens from it on demand. It holds
//! no other state: `parse_expr` is re-entrant through recursion, and each
//! nested call consumes exactly the tokens belonging to its expression.

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::expr::parse_expr;

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token, Error> {
        self.lexer.peek()
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.lexer.next()
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the consumed token matches, otherwise an
    /// UnexpectedToken error naming both kinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.advance()?;

        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: token.kind.to_string(),
                },
                token.span.start,
            ))
        } else {
            Ok(token)
        }
    }

    /// Expects an operator token, returning its symbol.
    pub fn expect_operator(&mut self) -> Result<char, Error> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Operator(op) => Ok(op),
            kind => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("an operator"),
                    found: kind.to_string(),
                },
                token.span.start,
            )),
        }
    }

    /// Expects an identifier token, returning its name. `what` names the
    /// grammatical role (class, field, method) for the error message.
    pub fn expect_identifier(&mut self, what: &str) -> Result<String, Error> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            kind => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: format!("a valid {} name", what),
                    found: kind.to_string(),
                },
                token.span.start,
            )),
        }
    }
}

/// Parses exactly one expression from the lexer's current position.
///
/// This is the main entry point for parsing. The cursor is left
/// immediately after the parsed expression; every error aborts the parse
/// and propagates to the caller.
pub fn parse(lexer: Lexer) -> Result<Expr, Error> {
    let mut parser = Parser::new(lexer);
    parse_expr(&mut parser)
}
