//! # monkey
//!
//! monkey is an interpreter for the Monkey language written in Rust.
//! It lexes and parses source text with a Pratt parser and evaluates the
//! resulting syntax tree directly, with integers, booleans, first-class
//! functions and lexical closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseErrors,
    interpreter::{
        lexer::Lexer,
        parser::core::Parser,
        value::core::{NULL, Object},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// source code as a tree, together with their canonical text rendering. The
/// tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse diagnostics carry the source position they point at. Runtime errors
/// carry the operand types or names involved, and their display text is the
/// message reported to the user.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together lexing, parsing, evaluation and the runtime value
/// representation.
pub mod interpreter;
/// Interactive read-eval-print loop.
pub mod repl;
/// Persistent evaluation sessions.
pub mod session;
/// General helpers shared by the parser and the evaluator.
pub mod util;

pub use session::Session;

/// Parses a source text into a program.
///
/// # Errors
/// Returns every diagnostic the parser recorded if any statement failed to
/// parse.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let program = parse("-a * b").unwrap();
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// assert!(parse("let x 5;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    if errors.is_empty() { Ok(program) } else { Err(ParseErrors(errors)) }
}

/// Returns the final evaluation result of a source text.
///
/// The source is evaluated in a fresh session. A runtime failure is not an
/// `Err`: it is returned as an `Error` object, as the language itself does.
///
/// # Errors
/// Returns the parse diagnostics if the source does not parse; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use monkey::get_result;
///
/// let result = get_result("let double = fn(x) { x * 2 }; double(21)").unwrap();
/// assert_eq!(result.inspect(), "42");
///
/// let result = get_result("5 + true; 10").unwrap();
/// assert_eq!(result.inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn get_result(source: &str) -> Result<Object, ParseErrors> {
    Session::new().run(source).map(|value| value.unwrap_or(NULL))
}
