use crate::{
    ast::node::{CondOp, Node, NodeKind, TypeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    let nud_fn = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        let binding_power = *parser.get_bp_lookup().get(&token_kind).unwrap();
        let led_fn = *parser.get_led_lookup().get(&token_kind).unwrap();
        left = led_fn(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Node::new(NodeKind::Integer { value }, token.line))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Float => {
            let result = parser.current_token().value.parse::<f64>();

            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Node::new(NodeKind::Float { value }, token.line))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Node::new(
                NodeKind::Identifier {
                    name: token.value.clone(),
                },
                token.line,
            ))
        }
        TokenKind::True => {
            let token = parser.advance();
            Ok(Node::new(NodeKind::Boolean { value: true }, token.line))
        }
        TokenKind::False => {
            let token = parser.advance();
            Ok(Node::new(NodeKind::Boolean { value: false }, token.line))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let operator_token = parser.advance().clone();

    let op = match operator_token.kind {
        TokenKind::Plus => '+',
        TokenKind::Dash => '-',
        TokenKind::Star => '*',
        TokenKind::Slash => '/',
        TokenKind::Percent => '%',
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    let mut node = Node::new(NodeKind::Binary { op }, operator_token.line);
    node.append(left);
    node.append(right);
    Ok(node)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Node, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    let mut node = Node::new(NodeKind::Unary { op: '-' }, operator_token.line);
    node.append(rhs);
    Ok(node)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(expr)
}

/// Parses a condition header: either `factor RELOP factor` or a
/// parenthesized logical combination `( cond || cond )` / `( cond && cond )`.
///
/// An opening paren is ambiguous between the logical form and a
/// parenthesized factor, so the logical form is tried first and the
/// cursor rewound when it does not hold.
pub fn parse_cond(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() == TokenKind::OpenParen {
        let checkpoint = parser.snapshot();
        match parse_logical_cond(parser) {
            Ok(node) => return Ok(node),
            Err(_) => parser.rewind(checkpoint),
        }
    }

    let left = parse_expr(parser, BindingPower::Unary)?;
    let operator_token = parser.advance().clone();

    let op = match operator_token.kind {
        TokenKind::LessEquals => CondOp::LessEquals,
        TokenKind::GreaterEquals => CondOp::GreaterEquals,
        TokenKind::Equals => CondOp::Equals,
        TokenKind::NotEquals => CondOp::NotEquals,
        TokenKind::Less => CondOp::Less,
        TokenKind::Greater => CondOp::Greater,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: operator_token.value.clone(),
                    message: String::from("expected comparison operator"),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    let right = parse_expr(parser, BindingPower::Unary)?;

    let mut node = Node::new(NodeKind::Condition { op }, operator_token.line);
    node.append(left);
    node.append(right);
    Ok(node)
}

fn parse_logical_cond(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let left = parse_cond(parser)?;

    let op = match parser.current_token_kind() {
        TokenKind::Or => CondOp::Or,
        TokenKind::And => CondOp::And,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected || or &&"),
                },
                parser.get_position(),
            ))
        }
    };
    let operator_token = parser.advance().clone();

    let right = parse_cond(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let mut node = Node::new(NodeKind::Condition { op }, operator_token.line);
    node.append(left);
    node.append(right);
    Ok(node)
}

/// Parses `scan ( tip )`, producing a Scan node owning its TypeTag.
pub fn parse_scan_expr(parser: &mut Parser) -> Result<Node, Error> {
    let scan_token = parser.expect(TokenKind::Scan)?;
    parser.expect(TokenKind::OpenParen)?;
    let type_tag = parse_type_tag(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let mut node = Node::new(NodeKind::Scan, scan_token.line);
    node.append(type_tag);
    Ok(node)
}

pub fn parse_type_tag(parser: &mut Parser) -> Result<Node, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::TipoInt => TypeKind::Integer,
        TokenKind::TipoFloat => TypeKind::Float,
        TokenKind::TipoString => TypeKind::Str,
        TokenKind::TipoBool => TypeKind::Boolean,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type keyword"),
                },
                parser.get_position(),
            ))
        }
    };

    let token = parser.advance();
    Ok(Node::new(NodeKind::TypeTag { kind }, token.line))
}
