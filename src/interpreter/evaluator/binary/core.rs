use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Object},
};

impl Evaluator {
    /// Evaluates an infix operation between two already evaluated operands.
    ///
    /// Both operands are always evaluated, left first, before this is
    /// called; `&&` and `||` do not short-circuit.
    ///
    /// - Two integers use integer arithmetic and comparison.
    /// - Two booleans support `==`, `!=`, `&&` and `||`.
    /// - Operands of different types are a type mismatch.
    /// - Anything else is an unknown operator for that type pair.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let v = Evaluator::eval_infix(InfixOperator::Lte, &Object::Integer(1), &Object::Integer(2));
    /// assert_eq!(v.unwrap(), Object::Boolean(true));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Plus,
    ///                                 &Object::Integer(5),
    ///                                 &Object::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator,
                      left: &Object,
                      right: &Object)
                      -> Result<Object, RuntimeError> {
        match (left, right) {
            (Object::Integer(l), Object::Integer(r)) => Self::eval_integer_infix(operator, *l, *r),
            (Object::Boolean(l), Object::Boolean(r)) => Self::eval_boolean_infix(operator, *l, *r),
            _ if left.object_type() != right.object_type() => {
                Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                 operator,
                                                 right: right.object_type() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                          operator,
                                                          right: right.object_type() }),
        }
    }
}
