/// Parsing errors.
///
/// Defines the diagnostics recorded while turning the token stream into an
/// abstract syntax tree. Every diagnostic carries the source position of the
/// token that triggered it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures produced while evaluating a program. They travel as
/// `Error` objects, so their `Display` text is the exact message a user sees.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
