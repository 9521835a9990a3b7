use tracing::debug;

use crate::{
    error::ParseErrors,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalConfig, Evaluator},
        lexer::Lexer,
        parser::core::Parser,
        value::core::Object,
    },
};

/// A long-lived evaluation context.
///
/// Every call to [`Session::run`] parses its source with a fresh parser and
/// evaluates it against the same top-level environment, so bindings made by
/// one run are visible to the next.
///
/// # Example
/// ```
/// use monkey::{Session, interpreter::value::core::Object};
///
/// let mut session = Session::new();
///
/// assert_eq!(session.run("let x = 5;").unwrap(), None);
/// assert_eq!(session.run("x * 2").unwrap(), Some(Object::Integer(10)));
/// assert!(session.run("let = 1;").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    env:       Environment,
    evaluator: Evaluator,
}

impl Session {
    /// Creates a session with an empty environment and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty environment and the given settings.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self { env:       Environment::new(),
               evaluator: Evaluator::with_config(config), }
    }

    /// The top-level environment shared by all runs.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Parses and evaluates one source text.
    ///
    /// Nothing is evaluated when the source has parse errors. Runtime
    /// failures are not `Err`: they come back as an `Error` object.
    ///
    /// # Returns
    /// The value of the last statement, or `None` when it produced no value
    /// (a `let`, or an empty source).
    pub fn run(&mut self, source: &str) -> Result<Option<Object>, ParseErrors> {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();

        let errors = parser.into_errors();
        if !errors.is_empty() {
            debug!(count = errors.len(), "skipping evaluation after parse errors");
            return Err(ParseErrors(errors));
        }

        Ok(self.evaluator.run_program(&program, &self.env))
    }
}
