use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Evaluator,
        value::core::{Object, ObjectType},
    },
};

impl Evaluator {
    /// Applies an infix operator to two booleans.
    ///
    /// Only `==`, `!=`, `&&` and `||` are defined; both operands have already
    /// been evaluated.
    pub(in crate::interpreter::evaluator) fn eval_boolean_infix(operator: InfixOperator,
                                                                left: bool,
                                                                right: bool)
                                                                -> Result<Object, RuntimeError> {
        match operator {
            InfixOperator::Eq => Ok(Object::from(left == right)),
            InfixOperator::NotEq => Ok(Object::from(left != right)),
            InfixOperator::And => Ok(Object::from(left && right)),
            InfixOperator::Or => Ok(Object::from(left || right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: ObjectType::Boolean,
                                                          operator,
                                                          right: ObjectType::Boolean }),
        }
    }
}
