use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("ifonly", TokenKind::IfOnly);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("print", TokenKind::Print);
        map.insert("this", TokenKind::This);
        map
    };
}

/// One lexical category per variant. Categories with data carry it as a
/// payload; the rest are bare markers.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    EOF,
    Number(i64),
    Operator(char),
    Identifier(String),

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Not, // !

    AtSign,
    Caret,
    Ampersand,

    Dot,
    Colon,
    Comma,

    // Reserved
    If,
    IfOnly,
    While,
    Return,
    Print,
    This,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
