use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// A `RuntimeError` never unwinds the host stack as a panic. The evaluator
/// wraps it into an `Error` object that short-circuits every enclosing
/// construct, so the `Display` text below is the exact message carried by
/// that object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operands of an infix operator have different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator being applied.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A prefix operator is not defined for the operand type.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator being applied.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ObjectType,
    },
    /// An infix operator is not defined for two operands of the same type.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator being applied.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A name is not bound anywhere in the environment chain.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The callee of a call expression is not a function.
    #[error("not a function: {found}")]
    NotAFunction {
        /// Type of the value that was called.
        found: ObjectType,
    },
    /// A function was applied to the wrong number of arguments.
    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount {
        /// Number of declared parameters.
        want: usize,
        /// Number of supplied arguments.
        got:  usize,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Checked 64-bit arithmetic overflowed.
    #[error("integer overflow: {left} {operator} {right}")]
    IntegerOverflow {
        /// Left operand value.
        left:     i64,
        /// The arithmetic operator.
        operator: InfixOperator,
        /// Right operand value.
        right:    i64,
    },
    /// Negating `i64::MIN`.
    #[error("integer overflow: -({operand})")]
    NegationOverflow {
        /// The operand value.
        operand: i64,
    },
    /// Function application nested deeper than the configured limit.
    #[error("maximum call depth exceeded: {limit}")]
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}
