use crate::{
    ast::{BlockStatement, Identifier, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement is one of:
    /// - a binding, `let <identifier> = <expression>;`
    /// - a return, `return <expression>;`
    /// - an expression, optionally followed by `;`
    ///
    /// The trailing `;` is optional in every form. On return the current
    /// token is the last one of the statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr })
    }

    /// Parses a block delimited by braces.
    ///
    /// The current token must be the opening `{`. Statements are parsed
    /// until the closing `}` or the end of input, which is left as the
    /// current token.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(BlockStatement { statements })
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }
}
