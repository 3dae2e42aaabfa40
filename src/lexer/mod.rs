//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning, one token per call
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and illegal character reporting

pub mod lexer;
pub mod tokens;
