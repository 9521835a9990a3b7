use tracing::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, TokenSource},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of infix operators, from loosest to tightest.
///
/// A call via `(` binds tightest so that `f(x)` groups before any operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`, `!=`
    Equals,
    /// `<`, `<=`, `>`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Operand of a prefix operator.
    Prefix,
    /// `(` following an expression.
    Call,
}

impl Precedence {
    /// Looks up the precedence of a token kind when used as an infix
    /// operator.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Or => Self::LogicalOr,
            TokenKind::And => Self::LogicalAnd,
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over a [`TokenSource`].
///
/// The parser keeps exactly two lookahead cells, `current` and `peek`, and
/// has no side effects other than advancing the token stream and recording
/// diagnostics.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("a + add(b * c) + d;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "((a + add((b * c))) + d)");
/// ```
pub struct Parser<S> {
    tokens: S,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek: Token,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and fills both lookahead cells.
    pub fn new(mut tokens: S) -> Self {
        let current = tokens.next_token();
        let peek = tokens.next_token();
        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until the end of input.
    ///
    /// A statement whose production fails is left out of the returned
    /// program. Its diagnostic is kept in [`Parser::errors`] and parsing
    /// resumes after the next `;`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    debug!(%error, "dropping malformed statement");
                    self.errors.push(error);
                    self.synchronize();
                },
            }
            self.advance();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        program
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses one expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token must start the expression. On return the current
    /// token is the last one belonging to it.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_at(precedence))
    }

    fn parse_expression_at(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        if self.current_is(TokenKind::Illegal) {
            return Err(ParseError::IllegalToken { literal:  self.current.literal.clone(),
                                                  position: self.current.position, });
        }

        let mut left = self.parse_prefix()?;

        while precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Shifts `peek` into `current` and pulls the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.tokens.next_token());
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances only if the peeked token has the expected kind.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind,
                                              position: self.peek.position, })
        }
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Skips to the next statement terminator or the end of input.
    fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.advance();
        }
    }
}
