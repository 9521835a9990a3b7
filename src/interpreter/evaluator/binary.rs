/// Operator dispatch on operand types.
///
/// Routes an infix operation to the integer or boolean rules, and reports
/// type mismatches and unsupported operators.
pub mod core;

/// Boolean operators.
///
/// Equality and the logical connectives on two booleans.
pub mod logic;

/// Integer operators.
///
/// Checked arithmetic and numeric comparison on two integers.
pub mod scalar;
