/// Core evaluation logic.
///
/// Contains the evaluator, its configuration, and the dispatch over
/// statements and expressions.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements logical not and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Handles arithmetic, comparisons and the logical connectives.
pub mod binary;

/// Function calls.
///
/// Argument evaluation, parameter binding, and the call depth limit.
pub mod function;
