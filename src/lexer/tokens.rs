use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("giez", TokenKind::TipoInt);
        map.insert("bevumbagon", TokenKind::TipoFloat);
        map.insert("iderennon", TokenKind::TipoString);
        map.insert("engos", TokenKind::TipoBool);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("print", TokenKind::Print);
        map.insert("scan", TokenKind::Scan);
        map.insert("loop", TokenKind::Loop);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Float,
    Str,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved
    TipoInt,
    TipoFloat,
    TipoString,
    TipoBool,
    True,
    False,
    Print,
    Scan,
    Loop,
    If,
    Else,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Str,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
