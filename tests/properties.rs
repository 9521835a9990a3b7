//! Property-based tests for the parser and evaluator.
//!
//! Random operator, call and literal expressions are generated as source
//! text and checked for:
//! 1. Idempotence: the rendering of a parsed expression parses back to the
//!    same rendering.
//! 2. Grouping: wrapping an expression in parentheses does not change its
//!    rendering.
//! 3. Totality: evaluation of closed integer expressions always yields an
//!    integer, a boolean or an error, and agrees with the evaluation of the
//!    rendering.

use monkey::{get_result, interpreter::value::core::Object, parse};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// -- Code Generation Strategies --

/// Generate an identifier that is not a keyword.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").expect("valid regex")
                                                       .prop_filter("not a keyword",
                                                                    |s| !is_keyword(s))
}

fn is_keyword(s: &str) -> bool {
    matches!(s, "fn" | "let" | "true" | "false" | "if" | "else" | "return")
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![(0i64..=1000).prop_map(|n| n.to_string()),
                Just("true".to_string()),
                Just("false".to_string())]
}

fn infix_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "<", "<=", ">", ">=", "==", "!=", "&&", "||"])
}

fn arithmetic_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="])
}

/// Generate an expression built from literals, identifiers, prefix and infix
/// operators, grouping and calls.
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![literal_strategy(), identifier_strategy()];

    leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![(prop::sample::select(vec!["-", "!"]), inner.clone())
                            .prop_map(|(op, operand)| format!("{op}{operand}")),
                        (inner.clone(), infix_operator_strategy(), inner.clone())
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.clone().prop_map(|e| format!("({e})")),
                        (identifier_strategy(), prop::collection::vec(inner, 0..3))
                            .prop_map(|(callee, args)| format!("{callee}({})", args.join(", "))),]
        })
}

/// Generate a closed integer expression: no identifiers, no calls.
fn integer_expression_strategy() -> impl Strategy<Value = String> {
    let leaf = (0i64..=100).prop_map(|n| n.to_string());

    leaf.prop_recursive(5, 32, 2, |inner| {
            prop_oneof![inner.clone().prop_map(|e| format!("-{e}")),
                        (inner.clone(), arithmetic_operator_strategy(), inner.clone())
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.prop_map(|e| format!("({e})")),]
        })
}

fn render(source: &str) -> String {
    parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse:\n{e}"))
                 .to_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rendering_is_idempotent(source in expression_strategy()) {
        let once = render(&source);
        let twice = render(&once);
        assert_eq!(once, twice, "source: {}", source);
    }

    #[test]
    fn grouping_does_not_change_rendering(source in expression_strategy()) {
        assert_eq!(render(&format!("({source})")), render(&source));
    }

    #[test]
    fn evaluation_is_total(source in integer_expression_strategy()) {
        let value = get_result(&source).expect("generated source parses");
        prop_assert!(matches!(value, Object::Integer(_) | Object::Boolean(_) | Object::Error(_)),
                     "unexpected value {:?} for {}", value, source);
    }

    #[test]
    fn rendering_preserves_meaning(source in integer_expression_strategy()) {
        let rendered = render(&source);
        assert_eq!(get_result(&rendered).expect("rendering parses"),
                   get_result(&source).expect("generated source parses"));
    }
}
