use log::trace;

use crate::{
    ast::{
        ast::{Expr, Operator},
        expressions::{
            BooleanExpr, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    trace!("expression at {} with {:?}", parser.current_token(), bp);

    let Some(nud) = parser.get_nud_lookup().get(&token_kind) else {
        let error = if token_kind == TokenKind::Illegal {
            ErrorImpl::IllegalCharacter {
                token: parser.current_token().literal.clone(),
            }
        } else {
            ErrorImpl::MissingPrefixHandler { kind: token_kind }
        };
        return Err(Error::new(error, parser.get_position()));
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than the caller, fold it into lhs
    while !parser.peek_token().is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

fn current_operator(parser: &Parser) -> Result<Operator, Error> {
    Operator::from_token_kind(parser.current_token_kind()).ok_or_else(|| {
        Error::new(
            ErrorImpl::MissingPrefixHandler {
                kind: parser.current_token_kind(),
            },
            parser.get_position(),
        )
    })
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    Ok(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        span: token.span.clone(),
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral {
            value,
            span: token.span.clone(),
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.is(TokenKind::True),
        span: token.span.clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = current_operator(parser)?;
    let operator_token = parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: operator_token.span.to(right.get_span()),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator = current_operator(parser)?;
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { .. } else { .. }
    let start = parser.current_token().span.clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token().is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: start.to(&parser.current_token().span),
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(<parameters>) { .. }
    let start = parser.current_token().span.clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        parameters,
        body,
        span: start.to(&parser.current_token().span),
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token().is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: parser.current_token().literal.clone(),
            span: parser.current_token().span.clone(),
        });

        if !parser.peek_token().is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, function: Expr) -> Result<Expr, Error> {
    let mut arguments = Vec::new();

    if parser.peek_token().is(TokenKind::RParen) {
        parser.advance();
    } else {
        loop {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);

            if !parser.peek_token().is(TokenKind::Comma) {
                break;
            }
            parser.advance();
        }

        parser.expect_peek(TokenKind::RParen)?;
    }

    Ok(Expr::Call(CallExpr {
        span: function.get_span().to(&parser.current_token().span),
        function: Box::new(function),
        arguments,
    }))
}
