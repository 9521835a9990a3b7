use crate::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Parses an expression that starts at the current token.
type PrefixParseFn<S> = fn(&mut Parser<S>) -> ParseResult<Expression>;

/// Maps a token to the prefix operator it spells, if any.
///
/// # Example
/// ```
/// use monkey::{
///     ast::PrefixOperator,
///     interpreter::{lexer::TokenKind, parser::expression::token_to_prefix_operator},
/// };
///
/// assert_eq!(token_to_prefix_operator(TokenKind::Bang),
///            Some(PrefixOperator::Bang));
/// assert_eq!(token_to_prefix_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

/// Maps a token to the infix operator it spells, if any.
///
/// `(` is not an operator here even though it binds as one: it produces a
/// call expression instead.
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Lte => Some(InfixOperator::Lte),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Gte => Some(InfixOperator::Gte),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        TokenKind::And => Some(InfixOperator::And),
        TokenKind::Or => Some(InfixOperator::Or),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    /// Parses the expression that starts at the current token, before any
    /// infix operator is applied.
    ///
    /// Prefix operators are recognised through [`token_to_prefix_operator`];
    /// every other starting token goes through the prefix registry.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        if let Some(operator) = token_to_prefix_operator(self.current.kind) {
            return self.parse_prefix_expression(operator);
        }

        match Self::prefix_parse_fn(self.current.kind) {
            Some(prefix) => prefix(self),
            None => Err(ParseError::NoPrefixParseFn { found:    self.current.kind,
                                                      position: self.current.position, }),
        }
    }

    /// Continues an expression whose left operand is already parsed. The
    /// current token is the infix operator or the `(` of a call.
    ///
    /// Only infix operators and `(` bind tighter than
    /// [`Precedence::Lowest`], so anything that is not an operator here is a
    /// call.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expression)
                                                      -> ParseResult<Expression> {
        match token_to_infix_operator(self.current.kind) {
            Some(operator) => self.parse_infix_expression(left, operator),
            None => self.parse_call_expression(left),
        }
    }

    /// The prefix parse function registered for a non-operator token kind.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<S>> {
        match kind {
            TokenKind::Identifier => Some(Self::parse_identifier),
            TokenKind::Integer => Some(Self::parse_integer_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.current.literal.clone())))
    }

    fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        self.current
            .literal
            .parse()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParseError::InvalidInteger { literal:  self.current.literal.clone(),
                                                      position: self.current.position, })
    }

    fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean(self.current_is(TokenKind::True)))
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` groups
    /// as `((-a) * b)`.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult<Expression> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                operand: Box::new(operand) })
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every operator left-associative: `a - b - c` is `((a - b) - c)`.
    fn parse_infix_expression(&mut self,
                              left: Expression,
                              operator: InfixOperator)
                              -> ParseResult<Expression> {
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right) })
    }

    /// Parses `(<expression>)`. Grouping leaves no node of its own.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `fn(<identifier>, ...) { ... }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_parameter)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses the argument list of `<callee>(<expression>, ...)`.
    fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_comma_separated(TokenKind::RParen, |parser| {
                                parser.parse_expression(Precedence::Lowest)
                            })?;

        Ok(Expression::Call { callee: Box::new(callee),
                              arguments })
    }
}
