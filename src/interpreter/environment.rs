use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Object;

/// A lexical scope: a name-to-value mapping chained to its enclosing scope.
///
/// `Environment` is a cheap, clonable handle. Clones share the same scope,
/// which is how a function value keeps the scope it was defined in alive
/// after the defining call has returned.
///
/// Lookups walk outwards through the chain; definitions always land in the
/// receiver's own bindings and silently overwrite an existing binding of the
/// same name.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Object};
///
/// let global = Environment::new();
/// global.set("x", Object::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.set("x", Object::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Object::Integer(2)));
/// assert_eq!(global.get("x"), Some(Object::Integer(1)));
/// assert_eq!(local.get("y"), None);
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

#[derive(Default)]
struct Scope {
    bindings: HashMap<String, Object>,
    outer:    Option<Environment>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                          outer:    Some(outer.clone()), })))
    }

    /// Resolves a name, searching this scope first and then each enclosing
    /// scope in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        match scope.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, never in an enclosing one.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Returns `true` if both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    // Bindings may hold functions that point back at this scope, so only
    // the names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
         .field("bindings", &names)
         .field("enclosed", &scope.outer.is_some())
         .finish()
    }
}
