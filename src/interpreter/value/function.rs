use std::fmt;

use crate::{
    ast::{BlockStatement, Identifier, join},
    interpreter::environment::Environment,
};

/// A function value: parameters, body and the defining environment.
///
/// The environment is captured by reference, not copied, so the function
/// sees later `let` bindings made in that scope and keeps it alive after the
/// defining call has returned.
pub struct Function {
    /// Parameter names, bound positionally on each call.
    pub parameters: Vec<Identifier>,
    /// The body evaluated on each call.
    pub body:       BlockStatement,
    /// The scope the function literal was evaluated in.
    pub env:        Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters && self.body == other.body && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {{\n{}\n}}", join(&self.parameters), self.body)
    }
}
