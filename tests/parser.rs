use monkey::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Position, TokenKind},
        parser::core::Parser,
    },
    parse,
};
use pretty_assertions::assert_eq;

fn render(src: &str) -> String {
    match parse(src) {
        Ok(program) => program.to_string(),
        Err(e) => panic!("{src:?} failed to parse:\n{e}"),
    }
}

fn parse_errors(src: &str) -> Vec<ParseError> {
    let mut parser = Parser::new(Lexer::new(src));
    parser.parse_program();
    parser.into_errors()
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (input, expected) in cases {
        assert_eq!(render(input), expected, "input: {input}");
    }
}

#[test]
fn comparison_variants_and_logic() {
    assert_eq!(render("a <= b >= c"), "((a <= b) >= c)");
    assert_eq!(render("a || b && c"), "(a || (b && c))");
    assert_eq!(render("a == b && c != d"), "((a == b) && (c != d))");
    assert_eq!(render("a && b || c && d"), "((a && b) || (c && d))");
}

#[test]
fn let_statements() {
    let program = parse("let x = 5; let y = true; let foobar = y;").unwrap();

    let names: Vec<&str> = program.statements
                                  .iter()
                                  .map(|statement| match statement {
                                      Statement::Let { name, .. } => name.name.as_str(),
                                      other => panic!("expected a let statement, got {other:?}"),
                                  })
                                  .collect();
    assert_eq!(names, ["x", "y", "foobar"]);
    assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
}

#[test]
fn return_statements() {
    let program = parse("return 5; return 10; return add(1, 2);").unwrap();

    assert_eq!(program.statements.len(), 3);
    assert!(program.statements
                   .iter()
                   .all(|statement| matches!(statement, Statement::Return { .. })));
    assert_eq!(program.to_string(), "return 5;return 10;return add(1, 2);");
}

#[test]
fn prefix_expression_tree() {
    let program = parse("!5;").unwrap();

    assert_eq!(program.statements,
               [Statement::Expression { expr: Expression::Prefix { operator: PrefixOperator::Bang,
                                                                   operand:  Box::new(Expression::IntegerLiteral(5)), } }]);
}

#[test]
fn infix_expression_tree() {
    let program = parse("x != 10").unwrap();

    let expected = Expression::Infix { left:     Box::new(Expression::Identifier(Identifier::new("x"))),
                                       operator: InfixOperator::NotEq,
                                       right:    Box::new(Expression::IntegerLiteral(10)), };
    assert_eq!(program.statements, [Statement::Expression { expr: expected }]);
}

#[test]
fn if_expressions() {
    assert_eq!(render("if (x < y) { x }"), "if(x < y) x");
    assert_eq!(render("if (x < y) { x } else { y }"), "if(x < y) xelse y");
}

#[test]
fn function_literals() {
    assert_eq!(render("fn(x, y) { x + y; }"), "fn(x, y) (x + y)");
    assert_eq!(render("fn() {};"), "fn() ");

    let program = parse("fn(x, y, z) {};").unwrap();
    let Statement::Expression { expr: Expression::FunctionLiteral { parameters, body } } =
        &program.statements[0]
    else {
        panic!("expected a function literal");
    };
    assert_eq!(parameters,
               &[Identifier::new("x"), Identifier::new("y"), Identifier::new("z")]);
    assert!(body.statements.is_empty());
}

#[test]
fn call_expressions() {
    assert_eq!(render("add(1, 2 * 3, 4 + 5);"), "add(1, (2 * 3), (4 + 5))");
    assert_eq!(render("f()"), "f()");
    assert_eq!(render("fn(x) { x }(5)"), "fn(x) x(5)");
    assert_eq!(render("make(1)(2)"), "make(1)(2)");
}

#[test]
fn missing_identifier_in_let() {
    let errors = parse_errors("let = 5;");

    assert_eq!(errors,
               [ParseError::UnexpectedToken { expected: TokenKind::Identifier,
                                              found:    TokenKind::Assign,
                                              position: Position { line: 1, column: 5 }, }]);
    assert_eq!(errors[0].to_string(), "line 1, column 5: expected identifier, found =");
}

#[test]
fn missing_assign_in_let() {
    let errors = parse_errors("let x 5;");

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0],
                     ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                                   found: TokenKind::Integer,
                                                   .. }));
}

#[test]
fn no_prefix_parse_function() {
    let errors = parse_errors("let x = ;");

    assert_eq!(errors,
               [ParseError::NoPrefixParseFn { found:    TokenKind::Semicolon,
                                              position: Position { line: 1, column: 9 }, }]);
}

#[test]
fn integer_out_of_range() {
    let errors = parse_errors("99999999999999999999");

    assert!(matches!(&errors[..],
                     [ParseError::InvalidInteger { literal, .. }] if literal == "99999999999999999999"));
}

#[test]
fn illegal_characters() {
    let errors = parse_errors("1 + @");

    assert_eq!(errors,
               [ParseError::IllegalToken { literal:  "@".to_string(),
                                           position: Position { line: 1, column: 5 }, }]);
}

#[test]
fn recovery_continues_after_semicolon() {
    let mut parser = Parser::new(Lexer::new("let = 1; let y = 2;\nlet 3; y"));
    let program = parser.parse_program();

    assert_eq!(program.to_string(), "let y = 2;y");
    let lines: Vec<usize> = parser.errors().iter().map(|e| e.position().line).collect();
    assert_eq!(lines, [1, 2]);
}

#[test]
fn malformed_condition_drops_statement() {
    let mut parser = Parser::new(Lexer::new("if (1  2) {}"));
    let program = parser.parse_program();

    assert!(program.statements.is_empty());
    assert!(matches!(parser.errors(),
                     [ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                                    found: TokenKind::Integer,
                                                    .. }]));
}

#[test]
fn positions_track_lines_and_comments() {
    let errors = parse_errors("// header\nlet a = 1;\n  let = 2;");

    assert_eq!(errors[0].position(), Position { line: 3, column: 7 });
}

#[test]
fn redundant_parentheses_leave_no_nodes() {
    let depth = 5000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(render(&source), "1");
}

#[test]
fn deep_prefix_chain_renders_and_drops() {
    let depth = 200_000;
    let program = parse(&format!("{}1", "-".repeat(depth))).unwrap();
    let rendered = program.to_string();

    assert_eq!(rendered.len(), 3 * depth + 1);
    assert!(rendered.starts_with("(-(-(-"));
    assert!(rendered.ends_with("1)))"));

    let copy = program.clone();
    assert_eq!(copy.statements.len(), 1);
    drop(copy);
    drop(program);
}

#[test]
fn deep_left_chain_drops() {
    let terms = 200_000;
    let program = parse(&format!("1{}", " + 1".repeat(terms))).unwrap();

    assert_eq!(program.statements.len(), 1);
    drop(program);
}

#[test]
fn deep_nested_blocks_drop() {
    let depth = 50_000;
    let source = format!("{}1{}", "if (true) { ".repeat(depth), " }".repeat(depth));
    let program = parse(&source).unwrap();

    assert_eq!(program.statements.len(), 1);
    drop(program);
}
