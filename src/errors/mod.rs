//! Error types for the front end.
//!
//! This module defines the errors the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - The error kinds the lexer and parser can report
//! - Helpful error messages and suggestions

pub mod errors;
