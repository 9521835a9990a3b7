use tracing::trace;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator, Unwind},
        value::core::Object,
    },
};

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then each argument from left to right.
    /// The first error stops evaluation; remaining arguments are not
    /// evaluated.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function to call.
    /// - `arguments`: Argument expressions.
    /// - `env`: Environment of the call site.
    ///
    /// # Returns
    /// The value the function body produced.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expression,
                                                       arguments: &[Expression],
                                                       env: &Environment)
                                                       -> EvalResult<Object> {
        let function = self.expression(callee, env)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.expression(argument, env))
                                 .collect::<EvalResult<Vec<_>>>()?;

        self.apply_function(&function, arguments)
    }

    /// Applies an evaluated function to evaluated arguments.
    ///
    /// The body runs in a fresh environment enclosed by the one the function
    /// captured, with each parameter bound to its argument. A `return` inside
    /// the body ends the call and yields its value; it never escapes to the
    /// caller.
    ///
    /// # Errors
    /// - `not a function` when `function` is not a function object.
    /// - `wrong number of arguments` when the argument count differs from
    ///   the parameter count.
    /// - `maximum call depth exceeded` when applications nest deeper than
    ///   the configured limit.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{evaluator::core::Evaluator, value::core::Object};
    ///
    /// let mut evaluator = Evaluator::new();
    /// let err = evaluator.apply_function(&Object::Integer(1), vec![]).unwrap_err();
    /// assert_eq!(Object::from(err).inspect(), "ERROR: not a function: INTEGER");
    /// ```
    pub fn apply_function(&mut self, function: &Object, arguments: Vec<Object>) -> EvalResult<Object> {
        let Object::Function(function) = function else {
            return Err(RuntimeError::NotAFunction { found: function.object_type() }.into());
        };

        if function.parameters.len() != arguments.len() {
            return Err(RuntimeError::WrongArgumentCount { want: function.parameters.len(),
                                                          got:  arguments.len(), }.into());
        }
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.config.max_call_depth }.into());
        }

        let scope = Environment::new_enclosed(&function.env);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            scope.set(parameter.name.clone(), argument);
        }

        self.depth += 1;
        trace!(depth = self.depth, arity = function.parameters.len(), "applying function");
        let result = self.eval_block(&function.body, &scope);
        self.depth -= 1;

        match result {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(error) => Err(error),
        }
    }
}
