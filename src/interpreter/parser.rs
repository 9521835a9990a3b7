/// The parser state, the precedence table and the Pratt expression loop.
///
/// Contains [`core::Parser`], its two-token lookahead and the
/// `parse_program` entry point that collects diagnostics.
pub mod core;

/// Prefix and infix parse functions.
///
/// Maps each token kind to the routine that parses an expression starting
/// with it (prefix) or continuing after an already parsed left operand
/// (infix).
pub mod expression;

/// Statement productions.
///
/// `let`, `return`, expression statements and braced blocks.
pub mod statement;

/// Shared helpers for delimited lists and identifiers.
pub mod utils;
