use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum is the closed set of kinds the parser dispatches on; the exact
/// source text is kept separately in [`Token::literal`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Identifier tokens; binding names such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>`
    #[token(">")]
    Gt,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// Line breaks; skipped, but they advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Produced forever once the source is exhausted.
    Eof,
    /// Source text the lexer does not recognise.
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
            Self::Eof => "end of input",
            Self::Illegal => "illegal token",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be given a line/column position for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column (in bytes) within the line, starting at 1.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token as handed to the parser.
///
/// Immutable once produced: the kind, the exact source text it matched and
/// where that text starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:     TokenKind,
    /// The source text the token matched (empty for [`TokenKind::Eof`]).
    pub literal:  String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self { kind,
               literal: literal.into(),
               position }
    }
}

/// A lazily advanced sequence of tokens.
///
/// The parser only ever asks for the next token; it keeps its own
/// one-token lookahead and never backtracks. Once the input is exhausted an
/// implementation must keep returning [`TokenKind::Eof`].
pub trait TokenSource {
    /// Produces the next token of the stream.
    fn next_token(&mut self) -> Token;
}

/// The lexer over a borrowed source string.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = lexer.next_token();
///                                 (token.kind != TokenKind::Eof).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Widens the current token to a whole character if it ends inside one.
    fn complete_char(&mut self) {
        let start = self.inner.span().start;
        let end = self.inner.span().end;
        if let Some(ch) = self.inner.source()[start..].chars().next() {
            let missing = (start + ch.len_utf8()).saturating_sub(end);
            if missing > 0 {
                self.inner.bump(missing);
            }
        }
    }

    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        Position { line:   extras.line,
                   column: offset.saturating_sub(extras.line_start) + 1, }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => {
                self.complete_char();
                TokenKind::Illegal
            },
            None => {
                let position = self.position_of(self.inner.source().len());
                return Token::new(TokenKind::Eof, "", position);
            },
        };

        let position = self.position_of(self.inner.span().start);
        Token::new(kind, self.inner.slice(), position)
    }
}

/// Advances the line counter past a newline.
fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Consumes a `//` comment up to, but not including, the end of the line.
fn skip_line_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());
    lex.bump(len);
    logos::Skip
}
