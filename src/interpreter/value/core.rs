use std::{fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::function::Function};

/// The canonical `true` object.
pub const TRUE: Object = Object::Boolean(true);
/// The canonical `false` object.
pub const FALSE: Object = Object::Boolean(false);
/// The single `null` object.
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the interpreter.
///
/// Besides ordinary values, two variants are control-flow sentinels:
/// `ReturnValue` carries a `return` out of nested blocks up to the enclosing
/// function call, and `Error` carries a failure up to the top level, where it
/// becomes the result of the statement that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value, e.g. an `if` without a taken branch.
    Null,
    /// A value on its way out of a function body.
    ReturnValue(Box<Self>),
    /// A failed evaluation.
    Error(RuntimeError),
    /// A closure.
    Function(Rc<Function>),
}

/// The type tag of an [`Object`], rendered as an uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `ERROR`
    Error,
    /// `FUNCTION`
    Function,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
            Self::Function => "FUNCTION",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Object {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::{NULL, Object, ObjectType};
    ///
    /// assert_eq!(Object::Integer(3).object_type(), ObjectType::Integer);
    /// assert_eq!(NULL.object_type().to_string(), "NULL");
    /// ```
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::ReturnValue(_) => ObjectType::ReturnValue,
            Self::Error(_) => ObjectType::Error,
            Self::Function(_) => ObjectType::Function,
        }
    }

    /// Applies the truthiness coercion used by `!` and `if`.
    ///
    /// Only `false` and `null` are falsy; every other value, including the
    /// integer `0`, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Returns `true` for `Error` objects.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The textual form printed by the REPL.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
