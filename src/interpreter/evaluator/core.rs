use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{
            core::{NULL, Object},
            function::Function,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Default limit on nested function applications.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// A non-local exit travelling up the tree.
///
/// Both variants short-circuit every enclosing construct through `?`. A
/// `Return` stops at the nearest function-call boundary (or the top level);
/// an `Error` only stops at the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A `return` statement's value.
    Return(Object),
    /// A runtime failure.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl From<Unwind> for Object {
    fn from(unwind: Unwind) -> Self {
        match unwind {
            Unwind::Return(value) => Self::ReturnValue(Box::new(value)),
            Unwind::Error(error) => Self::Error(error),
        }
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Unwind`] that interrupted them.
pub type EvalResult<T> = Result<T, Unwind>;

/// Evaluator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// How deeply function applications may nest before evaluation fails
    /// with a "maximum call depth exceeded" error.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// Walks the syntax tree against an [`Environment`].
///
/// The evaluator holds no bindings of its own; the caller supplies the
/// environment and may reuse it across programs to keep session state.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::Evaluator,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::core::Object,
/// };
///
/// let env = Environment::new();
/// let mut evaluator = Evaluator::new();
///
/// let program = Parser::new(Lexer::new("let add = fn(a, b) { a + b };")).parse_program();
/// evaluator.eval_program(&program, &env);
///
/// let program = Parser::new(Lexer::new("add(2, 3) * 2")).parse_program();
/// assert_eq!(evaluator.eval_program(&program, &env), Object::Integer(10));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    pub(in crate::interpreter::evaluator) config: EvalConfig,
    pub(in crate::interpreter::evaluator) depth:  usize,
}

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub const fn with_config(config: EvalConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Evaluates a whole program.
    ///
    /// The result is the value of the last statement. A top-level `return`
    /// yields its value unwrapped; a runtime error becomes an `Error` object.
    /// A program whose last statement produces no value (a `let`, or no
    /// statements at all) evaluates to `null`.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Object {
        self.run_program(program, env).unwrap_or(NULL)
    }

    /// Evaluates a whole program like [`Evaluator::eval_program`], but
    /// returns `None` when the last statement produced no value.
    ///
    /// The REPL uses this to stay silent after a `let`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn run_program(&mut self, program: &Program, env: &Environment) -> Option<Object> {
        match self.eval_statements(&program.statements, env) {
            Ok(value) => value,
            Err(Unwind::Return(value)) => Some(value),
            Err(Unwind::Error(error)) => {
                debug!(%error, "evaluation failed");
                Some(Object::Error(error))
            },
        }
    }

    /// Evaluates one statement, keeping sentinels visible.
    ///
    /// A `return` yields a `ReturnValue` object here rather than its unwrapped
    /// value. A `let` yields `null`.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> Object {
        match self.statement(statement, env) {
            Ok(value) => value.unwrap_or(NULL),
            Err(unwind) => unwind.into(),
        }
    }

    /// Evaluates one expression to an object; failures become `Error`
    /// objects.
    pub fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> Object {
        self.expression(expr, env).unwrap_or_else(Object::from)
    }

    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// Stops at the first `return` or error, which is propagated unchanged.
    /// `None` means the last statement produced no value.
    pub(in crate::interpreter::evaluator) fn eval_statements(&mut self,
                                                             statements: &[Statement],
                                                             env: &Environment)
                                                             -> EvalResult<Option<Object>> {
        let mut result = None;
        for statement in statements {
            result = self.statement(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluates a block in the current environment.
    ///
    /// Blocks do not open a scope of their own; only function calls do.
    pub(in crate::interpreter::evaluator) fn eval_block(&mut self,
                                                        block: &BlockStatement,
                                                        env: &Environment)
                                                        -> EvalResult<Object> {
        Ok(self.eval_statements(&block.statements, env)?.unwrap_or(NULL))
    }

    fn statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult<Option<Object>> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.expression(value, env)?;
                env.set(name.name.clone(), value);
                Ok(None)
            },
            Statement::Return { value } => Err(Unwind::Return(self.expression(value, env)?)),
            Statement::Expression { expr } => self.expression(expr, env).map(Some),
            Statement::Block(block) => self.eval_block(block, env).map(Some),
        }
    }

    pub(in crate::interpreter::evaluator) fn expression(&mut self,
                                                        expr: &Expression,
                                                        env: &Environment)
                                                        -> EvalResult<Object> {
        ensure_sufficient_stack(|| self.expression_at(expr, env))
    }

    fn expression_at(&mut self, expr: &Expression, env: &Environment) -> EvalResult<Object> {
        match expr {
            Expression::Identifier(identifier) => {
                env.get(&identifier.name)
                   .ok_or_else(|| {
                       RuntimeError::IdentifierNotFound { name: identifier.name.clone() }.into()
                   })
            },
            Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
            Expression::Boolean(value) => Ok(Object::from(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = self.expression(operand, env)?;
                Ok(Self::eval_prefix(*operator, &operand)?)
            },
            Expression::Infix { left,
                                operator,
                                right, } => {
                let left = self.expression(left, env)?;
                let right = self.expression(right, env)?;
                Ok(Self::eval_infix(*operator, &left, &right)?)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                let condition = self.expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(NULL)
                }
            },
            Expression::FunctionLiteral { parameters, body } => {
                Ok(Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        env.clone(), })))
            },
            Expression::Call { callee, arguments } => self.eval_call(callee, arguments, env),
        }
    }
}
