use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("statement at {}", parser.current_token());

    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span.clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: parser.current_token().literal.clone(),
        span: parser.current_token().span.clone(),
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Let(LetStmt {
        name,
        value,
        span: start.to(&parser.current_token().span),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span.clone();

    let value = if parser.peek_token().is_one_of_many(&[
        TokenKind::Semicolon,
        TokenKind::RBrace,
        TokenKind::EOF,
    ]) {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Lowest)?)
    };

    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: start.to(&parser.current_token().span),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;
    let span = expression.get_span().clone();

    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt { expression, span }))
}

/// Parses `{ ... }` starting at the opening brace, leaving the closing brace current.
///
/// A statement that fails inside the block is recorded and skipped so the
/// rest of the block is still parsed. A failure on the closing `}` leaves
/// that brace current, so statements after the block are unaffected.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.advance().span;

    let mut statements = Vec::new();
    while !parser.current_token().is(TokenKind::RBrace) {
        if parser.current_token().is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::EOF,
                },
                parser.get_position(),
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            // Failed on the closing brace itself, which still ends this block
            Err(error) if parser.current_token().is(TokenKind::RBrace) => {
                parser.record_error(error);
                continue;
            }
            Err(error) => parser.recover(error),
        }
        parser.advance();
    }

    Ok(BlockStmt {
        statements,
        span: start.to(&parser.current_token().span),
    })
}
