use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a comma-separated list of items up to a closing token.
    ///
    /// This utility is shared by parameter lists and call arguments. The
    /// current token is the opening delimiter. `parse_item` is called with
    /// the first token of each item as the current token; an immediately
    /// following closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or the closing token
    /// is missing; the whole list is then discarded.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses a function parameter, which must be a plain identifier.
    pub(in crate::interpreter::parser) fn parse_parameter(&mut self) -> ParseResult<Identifier> {
        if self.current_is(TokenKind::Identifier) {
            Ok(Identifier::new(self.current.literal.clone()))
        } else {
            Err(ParseError::UnexpectedToken { expected: TokenKind::Identifier,
                                              found:    self.current.kind,
                                              position: self.current.position, })
        }
    }
}
