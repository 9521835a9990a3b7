use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Object},
};

impl Evaluator {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `!`: negated truthiness; accepts any operand.
    /// - `-`: integer negation; any other operand type is an unknown
    ///   operator.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Minus, &Object::Integer(5)).unwrap();
    /// assert_eq!(v, Object::Integer(-5));
    ///
    /// // `0` is truthy.
    /// let v = Evaluator::eval_prefix(PrefixOperator::Bang, &Object::Integer(0)).unwrap();
    /// assert_eq!(v, Object::Boolean(false));
    ///
    /// let err = Evaluator::eval_prefix(PrefixOperator::Minus, &Object::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, operand: &Object) -> Result<Object, RuntimeError> {
        match operator {
            PrefixOperator::Bang => Ok(Object::from(!operand.is_truthy())),
            PrefixOperator::Minus => match operand {
                Object::Integer(value) => {
                    value.checked_neg()
                         .map(Object::Integer)
                         .ok_or(RuntimeError::NegationOverflow { operand: *value })
                },
                _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                               operand: operand.object_type() }),
            },
        }
    }
}
