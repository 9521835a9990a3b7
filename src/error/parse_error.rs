use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::{Position, TokenKind};

/// Represents all diagnostics the parser can record.
///
/// A failed production never aborts `parse_program`; the diagnostic is
/// collected and the parser skips ahead to the next statement terminator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next token did not have the kind the current production requires.
    #[error("{position}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// The token kind the grammar required here.
        expected: TokenKind,
        /// The token kind actually present.
        found:    TokenKind,
        /// Where the offending token starts.
        position: Position,
    },
    /// No expression can start with the given token.
    #[error("{position}: no prefix parse function for {found}")]
    NoPrefixParseFn {
        /// The token kind that cannot begin an expression.
        found:    TokenKind,
        /// Where the offending token starts.
        position: Position,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    #[error("{position}: could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal as written in the source.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// The lexer produced a token for text it does not recognise.
    #[error("{position}: illegal token {literal:?}")]
    IllegalToken {
        /// The unrecognised source text.
        literal:  String,
        /// Where the text starts.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::NoPrefixParseFn { position, .. }
            | Self::InvalidInteger { position, .. }
            | Self::IllegalToken { position, .. } => *position,
        }
    }
}

/// All diagnostics collected while parsing one source text.
///
/// Returned by [`crate::parse`] and [`crate::Session::run`] when at least one
/// statement failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// The individual diagnostics, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
