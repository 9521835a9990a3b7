/// Variable scopes.
///
/// Defines the shared, chainable scope handle used for the top level and for
/// every function call.
pub mod environment;
/// The evaluator module executes syntax tree nodes and computes results.
///
/// The evaluator walks the tree, applies operators, binds names, calls
/// functions, and turns failures into error values.
///
/// # Responsibilities
/// - Evaluates programs, statements and expressions.
/// - Propagates `return` and runtime errors through nested constructs.
/// - Enforces the call depth limit.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, its literal text and its position. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Skips whitespace and `//` comments.
/// - Emits illegal tokens for unrecognised characters instead of failing.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A Pratt parser: each token kind maps to a prefix and/or infix parse
/// function, and binding power decides how far an expression extends.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records diagnostics with positions and recovers at the next `;`.
pub mod parser;
/// The value module defines the runtime objects produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type names.
/// - Implements truthiness and the inspect rendering.
/// - Defines function values together with their captured scope.
pub mod value;
