use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one expression by recursive descent, dispatching on the first
/// consumed token.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.kind {
        TokenKind::EOF => Err(Error::new(ErrorImpl::UnexpectedEndOfInput, token.span.start)),
        TokenKind::Number(value) => Ok(Expr::Constant(value)),
        TokenKind::Identifier(name) => Ok(Expr::Variable(name)),
        TokenKind::This => Ok(Expr::This),
        TokenKind::AtSign => parse_class_ref(parser),
        TokenKind::OpenParen => parse_binop(parser),
        TokenKind::Ampersand => parse_field_read(parser),
        TokenKind::Caret => parse_method_call(parser),
        kind => Err(Error::new(
            ErrorImpl::InvalidExpressionStart {
                token: kind.to_string(),
            },
            token.span.start,
        )),
    }
}

fn parse_class_ref(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect_identifier("class")?;

    Ok(Expr::ClassRef(name))
}

fn parse_binop(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_expr(parser)?;
    let operator = parser.expect_operator()?;
    let right = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Binop {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

fn parse_field_read(parser: &mut Parser) -> Result<Expr, Error> {
    let base = parse_expr(parser)?;
    parser.expect(TokenKind::Dot)?;
    let field = parser.expect_identifier("field")?;

    Ok(Expr::FieldRead {
        base: Box::new(base),
        field,
    })
}

fn parse_method_call(parser: &mut Parser) -> Result<Expr, Error> {
    let base = parse_expr(parser)?;
    parser.expect(TokenKind::Dot)?;
    let method = parser.expect_identifier("method")?;
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_call_args(parser)?;

    Ok(Expr::MethodCall {
        base: Box::new(base),
        method,
        arguments,
    })
}

/// Argument list of a method call.
///
/// The list ends when the peeked token is the closing paren; commas
/// between arguments are optional separators, and a comma must be
/// followed by another argument expression. Hitting end of input here
/// surfaces as the missing CloseParen.
fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    while !matches!(parser.peek()?.kind, TokenKind::CloseParen | TokenKind::EOF) {
        arguments.push(parse_expr(parser)?);

        while parser.peek()?.kind == TokenKind::Comma {
            parser.advance()?; // throw away the comma
            arguments.push(parse_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(arguments)
}
