/// The runtime object model.
///
/// Defines [`core::Object`], every value an evaluation can produce, and
/// [`core::ObjectType`], the uppercase type tags used in error messages.
pub mod core;

/// Function values.
///
/// A function pairs its parameter list and body with the environment it was
/// defined in.
pub mod function;
