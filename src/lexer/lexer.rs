use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
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
            pos: 0,
            line: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
                RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
            ],
            source,
            file: file_name,
        }
    }

    /// Advances the cursor, counting newlines in the consumed text so
    /// every token knows the line it starts on.
    pub fn advance_n(&mut self, n: usize) {
        for byte in self.source.as_bytes()[self.pos..self.pos + n].iter() {
            if *byte == b'\n' {
                self.line += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let line = lexer.line();
    let start = lexer.pos();
    let token = MK_TOKEN!(
        kind,
        matched.clone(),
        line,
        Span {
            start: Position(start as u32, lexer.file()),
            end: Position((start + matched.len()) as u32, lexer.file())
        }
    );
    lexer.push(token);
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn string_handler(lexer: &mut Lexer, regex: Regex) {
    let raw = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let line = lexer.line();
    let start = lexer.pos();
    lexer.advance_n(raw.len());

    let mut value = String::new();
    let mut chars = raw[1..raw.len() - 1].chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('n') => {
                    value.push('\n');
                    chars.next();
                }
                Some('t') => {
                    value.push('\t');
                    chars.next();
                }
                Some('\\') => {
                    value.push('\\');
                    chars.next();
                }
                _ => value.push(ch),
            }
        } else {
            value.push(ch);
        }
    }

    let end = start + raw.len();
    let token = MK_TOKEN!(
        TokenKind::Str,
        value,
        line,
        Span {
            start: Position(start as u32, lexer.file()),
            end: Position(end as u32, lexer.file())
        }
    );
    lexer.push(token);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else {
        TokenKind::Identifier
    };

    let line = lexer.line();
    let start = lexer.pos();
    let token = MK_TOKEN!(
        kind,
        value.clone(),
        line,
        Span {
            start: Position(start as u32, lexer.file()),
            end: Position((start + value.len()) as u32, lexer.file())
        }
    );
    lexer.push(token);
    lexer.advance_n(value.len());
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                Position(lex.pos() as u32, lex.file()),
            ));
        }
    }

    let line = lex.line();
    let eof_pos = lex.pos();
    let token = MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        line,
        Span {
            start: Position(eof_pos as u32, lex.file()),
            end: Position(eof_pos as u32, lex.file())
        }
    );
    lex.push(token);
    Ok(lex.tokens)
}
