use crate::{
    ast::node::{Node, NodeKind, StepOp, TypeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_cond, parse_expr, parse_scan_expr},
        lookups::BindingPower,
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    Err(Error::new(
        ErrorImpl::UnexpectedToken {
            token: parser.current_token().value.clone(),
        },
        parser.get_position(),
    ))
}

/// `tip IDENT '=' der ';'` where der is an expression, a string literal
/// or a scan. The Declaration node owns its TypeTag and its initializer.
pub fn parse_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let type_token = parser.advance().clone();
    let type_kind = match type_token.kind {
        TokenKind::TipoInt => TypeKind::Integer,
        TokenKind::TipoFloat => TypeKind::Float,
        TokenKind::TipoString => TypeKind::Str,
        TokenKind::TipoBool => TypeKind::Boolean,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: type_token.value.clone(),
                    message: String::from("expected a type keyword"),
                },
                type_token.span.start.clone(),
            ))
        }
    };

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let variable_name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Assignment)?;

    let value = match parser.current_token_kind() {
        TokenKind::Scan => parse_scan_expr(parser)?,
        TokenKind::Str => {
            let token = parser.advance();
            Node::new(
                NodeKind::Str {
                    value: token.value.clone(),
                },
                token.line,
            )
        }
        _ => parse_expr(parser, BindingPower::Default)?,
    };

    parser.expect(TokenKind::Semicolon)?;

    let mut node = Node::new(
        NodeKind::Declaration {
            name: variable_name,
        },
        type_token.line,
    );
    node.append(Node::new(NodeKind::TypeTag { kind: type_kind }, type_token.line));
    node.append(value);
    Ok(node)
}

/// `IDENT '=' expr ';'` or `IDENT '=' scan ';'`. Mutates an existing
/// binding; never introduces a declaration.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let name_token = parser.advance().clone();

    parser.expect(TokenKind::Assignment)?;

    let value = if parser.current_token_kind() == TokenKind::Scan {
        parse_scan_expr(parser)?
    } else {
        parse_expr(parser, BindingPower::Default)?
    };

    parser.expect(TokenKind::Semicolon)?;

    let mut node = Node::new(
        NodeKind::Assignment {
            name: name_token.value.clone(),
        },
        name_token.line,
    );
    node.append(value);
    Ok(node)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let if_token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_cond(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_block(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let else_body = parse_block(parser)?;

        let mut node = Node::new(NodeKind::IfElse, if_token.line);
        node.append(condition);
        node.append(then_body);
        node.append(else_body);
        return Ok(node);
    }

    let mut node = Node::new(NodeKind::If, if_token.line);
    node.append(condition);
    node.append(then_body);
    Ok(node)
}

/// `loop '(' decl cond ';' pass ')' '{' globals '}'`. The init
/// declaration consumes its own semicolon.
pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let loop_token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;

    match parser.current_token_kind() {
        TokenKind::TipoInt | TokenKind::TipoFloat | TokenKind::TipoString | TokenKind::TipoBool => {}
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected declaration in loop header"),
                },
                parser.get_position(),
            ))
        }
    }
    let declaration = parse_decl_stmt(parser)?;

    let condition = parse_cond(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    let pass = parse_pass(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    let mut node = Node::new(NodeKind::Loop, loop_token.line);
    node.append(declaration);
    node.append(condition);
    node.append(pass);
    node.append(body);
    Ok(node)
}

fn parse_pass(parser: &mut Parser) -> Result<Node, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;

    let op = match parser.current_token_kind() {
        TokenKind::PlusPlus => StepOp::Increment,
        TokenKind::MinusMinus => StepOp::Decrement,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected ++ or -- in loop post-step"),
                },
                parser.get_position(),
            ))
        }
    };
    parser.advance();

    Ok(Node::new(
        NodeKind::Pass {
            name: name_token.value.clone(),
            op,
        },
        name_token.line,
    ))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let print_token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;

    let value = match parser.current_token_kind() {
        TokenKind::Str => {
            let token = parser.advance();
            Node::new(
                NodeKind::Str {
                    value: token.value.clone(),
                },
                token.line,
            )
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Node::new(
                NodeKind::Identifier {
                    name: token.value.clone(),
                },
                token.line,
            )
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected string or identifier in print"),
                },
                parser.get_position(),
            ))
        }
    };

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    let mut node = Node::new(NodeKind::Print, print_token.line);
    node.append(value);
    Ok(node)
}

pub fn parse_block(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut block = Node::new(NodeKind::Block, open.line);
    while parser.current_token_kind() != TokenKind::CloseCurly {
        block.append(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(block)
}
