use monkey::interpreter::lexer::{Lexer, Position, Token, TokenKind, TokenSource};
use pretty_assertions::assert_eq;

fn tokens(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn kinds_and_literals(src: &str) -> Vec<(TokenKind, String)> {
    tokens(src).into_iter().map(|token| (token.kind, token.literal)).collect()
}

#[test]
fn token_table() {
    let input = "let five = 5;
let ten = 10;
let add = fn(x, y) {
  x + y;
};
let result = add(five, ten);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
  return true;
} else {
  return false;
}
return 1|2 == 2 && 1 >= 2 || 2 <= 3 && 2&0 != 3;
";

    use TokenKind::*;
    let expected = [(Let, "let"),
                    (Identifier, "five"),
                    (Assign, "="),
                    (Integer, "5"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Identifier, "ten"),
                    (Assign, "="),
                    (Integer, "10"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Identifier, "add"),
                    (Assign, "="),
                    (Function, "fn"),
                    (LParen, "("),
                    (Identifier, "x"),
                    (Comma, ","),
                    (Identifier, "y"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Identifier, "x"),
                    (Plus, "+"),
                    (Identifier, "y"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Identifier, "result"),
                    (Assign, "="),
                    (Identifier, "add"),
                    (LParen, "("),
                    (Identifier, "five"),
                    (Comma, ","),
                    (Identifier, "ten"),
                    (RParen, ")"),
                    (Semicolon, ";"),
                    (Bang, "!"),
                    (Minus, "-"),
                    (Slash, "/"),
                    (Asterisk, "*"),
                    (Integer, "5"),
                    (Semicolon, ";"),
                    (Integer, "5"),
                    (Lt, "<"),
                    (Integer, "10"),
                    (Gt, ">"),
                    (Integer, "5"),
                    (Semicolon, ";"),
                    (If, "if"),
                    (LParen, "("),
                    (Integer, "5"),
                    (Lt, "<"),
                    (Integer, "10"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (True, "true"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Else, "else"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (False, "false"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Return, "return"),
                    (Integer, "1"),
                    (Pipe, "|"),
                    (Integer, "2"),
                    (Eq, "=="),
                    (Integer, "2"),
                    (And, "&&"),
                    (Integer, "1"),
                    (Gte, ">="),
                    (Integer, "2"),
                    (Or, "||"),
                    (Integer, "2"),
                    (Lte, "<="),
                    (Integer, "3"),
                    (And, "&&"),
                    (Integer, "2"),
                    (Ampersand, "&"),
                    (Integer, "0"),
                    (NotEq, "!="),
                    (Integer, "3"),
                    (Semicolon, ";"),
                    (Eof, "")];

    let expected: Vec<(TokenKind, String)> =
        expected.into_iter().map(|(kind, literal)| (kind, literal.to_string())).collect();
    assert_eq!(kinds_and_literals(input), expected);
}

#[test]
fn identifiers_and_keywords() {
    assert_eq!(kinds_and_literals("letter fn_1 _x iffy"),
               [(TokenKind::Identifier, "letter".to_string()),
                (TokenKind::Identifier, "fn_1".to_string()),
                (TokenKind::Identifier, "_x".to_string()),
                (TokenKind::Identifier, "iffy".to_string()),
                (TokenKind::Eof, String::new())]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds_and_literals("1 // one\n// two\n2"),
               [(TokenKind::Integer, "1".to_string()),
                (TokenKind::Integer, "2".to_string()),
                (TokenKind::Eof, String::new())]);
}

#[test]
fn illegal_characters_keep_their_text() {
    assert_eq!(kinds_and_literals("@ ü 5 λ"),
               [(TokenKind::Illegal, "@".to_string()),
                (TokenKind::Illegal, "ü".to_string()),
                (TokenKind::Integer, "5".to_string()),
                (TokenKind::Illegal, "λ".to_string()),
                (TokenKind::Eof, String::new())]);
}

#[test]
fn positions_are_one_based_byte_columns() {
    let positions: Vec<Position> = tokens("let ü = 1;\n  x").iter().map(|token| token.position).collect();

    assert_eq!(positions,
               [Position { line: 1, column: 1 },
                Position { line: 1, column: 5 },
                Position { line: 1, column: 8 },
                Position { line: 1, column: 10 },
                Position { line: 1, column: 11 },
                Position { line: 2, column: 3 },
                Position { line: 2, column: 4 }]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
