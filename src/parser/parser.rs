//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser holds the current token and one token of lookahead, pulled
//! from a [`Lexer`] on demand. Expressions are parsed with a Pratt parser
//! driven by the shared lookup tables in [`super::lookups`]:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors never abort a parse. They are collected in order and the parser
//! carries on with the next token.

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{BPLookup, BindingPower, LEDLookup, NUDLookup, StmtLookup, LOOKUPS},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer it pulls tokens from, the current and next
/// token, and every error found so far.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors in the order they were found
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer over the source to parse
    ///
    /// # Returns
    ///
    /// A parser with its current and peek tokens already read.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program and their
    /// error is recorded; parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current.is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.recover(error),
            }
            self.advance();
        }

        program
    }

    /// Returns every error recorded so far, in the order found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the parser and returns the recorded errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let current = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, current)
    }

    /// Advances only if the lookahead token is of the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenKind required next
    ///
    /// # Returns
    ///
    /// Returns Ok(()) with the matched token now current, otherwise an
    /// `UnexpectedToken` error positioned at the lookahead token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(())
    }

    /// Records an error and keeps parsing.
    pub fn record_error(&mut self, error: Error) {
        debug!("parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Records the error of a failed statement and steps onto a `;` that
    /// directly follows the failure point, so the caller's next advance
    /// starts a fresh statement.
    pub fn recover(&mut self, error: Error) {
        self.record_error(error);
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Returns the binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Returns the binding power of the lookahead token.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.get_bp_lookup()
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &'static StmtLookup {
        &LOOKUPS.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &'static NUDLookup {
        &LOOKUPS.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &'static LEDLookup {
        &LOOKUPS.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &'static BPLookup {
        &LOOKUPS.binding_power_lookup
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// for the source and parses every statement until EOF.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional name of the source, `"shell"` when absent
///
/// # Returns
///
/// A tuple containing:
/// - The Program, holding every statement that parsed
/// - Every error found; the parse failed if this is not empty
pub fn parse(source: impl Into<String>, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::with_file(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
