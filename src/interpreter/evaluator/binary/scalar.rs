use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Evaluator,
        value::core::{Object, ObjectType},
    },
};

impl Evaluator {
    /// Applies an infix operator to two integers.
    ///
    /// Arithmetic is checked: overflow and division by zero are runtime
    /// errors rather than wrapping or panicking. Division truncates towards
    /// zero. The logical connectives are not defined on integers.
    pub(in crate::interpreter::evaluator) fn eval_integer_infix(operator: InfixOperator,
                                                                left: i64,
                                                                right: i64)
                                                                -> Result<Object, RuntimeError> {
        let overflow = || RuntimeError::IntegerOverflow { left,
                                                          operator,
                                                          right };
        match operator {
            InfixOperator::Plus => left.checked_add(right).map(Object::Integer).ok_or_else(overflow),
            InfixOperator::Minus => left.checked_sub(right).map(Object::Integer).ok_or_else(overflow),
            InfixOperator::Asterisk => {
                left.checked_mul(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Slash => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Lt => Ok(Object::from(left < right)),
            InfixOperator::Lte => Ok(Object::from(left <= right)),
            InfixOperator::Gt => Ok(Object::from(left > right)),
            InfixOperator::Gte => Ok(Object::from(left >= right)),
            InfixOperator::Eq => Ok(Object::from(left == right)),
            InfixOperator::NotEq => Ok(Object::from(left != right)),
            InfixOperator::And | InfixOperator::Or => {
                Err(RuntimeError::UnknownInfixOperator { left: ObjectType::Integer,
                                                         operator,
                                                         right: ObjectType::Integer })
            },
        }
    }
}
