use std::fs;

use exprtree::{
    ast::ExprNode,
    engine::{
        builder::build,
        evaluator::evaluate,
        render::{render_infix, render_postfix, render_prefix},
        validator::validate,
    },
    error::{BuildError, EvalError, ValidationError},
    process_expression,
};

fn eval(expr: &str) -> f64 {
    let summary = process_expression(expr).unwrap_or_else(|e| panic!("'{expr}' failed: {e}"));
    summary.result
           .unwrap_or_else(|e| panic!("'{expr}' failed to evaluate: {e}"))
}

fn validation_error(expr: &str) -> ValidationError {
    match validate(expr) {
        Ok(()) => panic!("'{expr}' validated but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_eq!(eval("8-3-2"), 3.0);
    assert_eq!(eval("8/4/2"), 1.0);
    assert_eq!(eval("8 - 3 - 2"), 3.0);
    assert_eq!(eval("1 - 2 + 3"), 2.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("10-2*3"), 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("(1+2)*(3+4)"), 21.0);
    assert_eq!(eval("((2))"), 2.0);
}

#[test]
fn fractional_literals_evaluate() {
    assert_eq!(eval("1.5*2"), 3.0);
    assert_eq!(eval("7.5/2.5"), 3.0);
    assert_eq!(eval(".5*4"), 2.0);
    assert_eq!(eval("10/4"), 2.5);
}

#[test]
fn whitespace_is_ignored() {
    assert!(validate(" ( 2 + 3 ) * 4 ").is_ok());
    assert_eq!(eval(" ( 2 + 3 ) * 4 "), 20.0);
}

#[test]
fn division_by_zero_is_reported_and_recoverable() {
    let tree = build("5/0").unwrap();
    assert!(matches!(evaluate(&tree), Err(EvalError::DivisionByZero)));

    let summary = process_expression("10/(5-5)").unwrap();
    assert!(matches!(summary.result, Err(EvalError::DivisionByZero)));

    // A failing expression never poisons the next one.
    assert_eq!(eval("1+1"), 2.0);
}

#[test]
fn summary_distinguishes_zero_from_failure() {
    assert_eq!(process_expression("0*5").unwrap().result.unwrap(), 0.0);
    assert!(process_expression("5/0").unwrap().result.is_err());
}

#[test]
fn consecutive_operators_are_rejected() {
    assert!(matches!(validation_error("2++3"),
                     ValidationError::ConsecutiveOperators { position: 2 }));
    assert!(matches!(validation_error("2 + * 3"),
                     ValidationError::ConsecutiveOperators { position: 4 }));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(validation_error("(2+3"),
                     ValidationError::UnbalancedParentheses { position: 4 }));
    assert!(matches!(validation_error("2+3)"),
                     ValidationError::UnbalancedParentheses { position: 3 }));
}

#[test]
fn trailing_operator_is_rejected() {
    assert!(matches!(validation_error("2+"), ValidationError::TrailingOperator { position: 1 }));
    assert!(matches!(validation_error("2 + 3 * "),
                     ValidationError::TrailingOperator { position: 6 }));
}

#[test]
fn invalid_characters_are_rejected_with_position() {
    assert!(matches!(validation_error("2#3"),
                     ValidationError::InvalidCharacter { character: '#', position: 1 }));
    assert!(matches!(validation_error("2 + x"),
                     ValidationError::InvalidCharacter { character: 'x', position: 4 }));
}

#[test]
fn traversals_of_a_known_tree() {
    let tree = build("3+4*5").unwrap();
    assert_eq!(render_infix(&tree), "3 + 4 * 5");
    assert_eq!(render_prefix(&tree), "+ 3 * 4 5");
    assert_eq!(render_postfix(&tree), "3 4 5 * +");
}

#[test]
fn traversals_are_read_only_and_idempotent() {
    let tree = build("(2+3)*4").unwrap();

    let first = render_prefix(&tree);
    assert_eq!(render_prefix(&tree), first);
    assert_eq!(render_infix(&tree), render_infix(&tree));
    assert_eq!(render_postfix(&tree), render_postfix(&tree));

    // The tree is untouched by rendering: it still evaluates.
    assert_eq!(evaluate(&tree).unwrap(), 20.0);
}

#[test]
fn every_validated_expression_builds_a_single_root() {
    for expr in ["1", "1+2", "(2+3)*4", "1+2*3-4/5", "((1+2))*((3))"] {
        let tree = build(expr).unwrap_or_else(|e| panic!("'{expr}' failed to build: {e}"));
        assert!(tree.root.is_some(), "'{expr}' built no root");
    }
}

#[test]
fn malformed_literal_surfaces_at_evaluation() {
    assert!(validate("1.2.3").is_ok());

    let tree = build("1.2.3").unwrap();
    assert!(matches!(evaluate(&tree),
                     Err(EvalError::MalformedNumber { literal }) if literal == "1.2.3"));
}

#[test]
fn empty_expression_builds_an_empty_tree() {
    assert!(validate("").is_ok());

    let tree = build("").unwrap();
    assert!(tree.root.is_none());
    assert_eq!(evaluate(&tree).unwrap(), 0.0);
    assert_eq!(render_infix(&tree), "");
}

#[test]
fn leading_operator_fails_the_build_without_panicking() {
    // A leading operator slips through validation; the builder reports it.
    assert!(validate("+2").is_ok());
    assert!(matches!(build("+2"), Err(BuildError::MissingOperand { operator: '+' })));
}

#[test]
fn validator_acceptance_gaps_are_preserved() {
    assert!(validate("2(3+4)").is_ok());
    assert!(validate("()").is_ok());
    assert!(validate("1.2.3").is_ok());
}

#[test]
fn unsupported_operator_is_reported() {
    use exprtree::engine::evaluator::evaluate_node;

    let node = ExprNode::branch('%', ExprNode::leaf("5"), ExprNode::leaf("3"));
    assert!(matches!(evaluate_node(&node),
                     Err(EvalError::UnsupportedOperator { operator: '%' })));
}

#[test]
fn expression_corpus_evaluates() {
    let contents = fs::read_to_string("tests/expressions.txt").expect("missing file");
    let expected = [3.0, 1.0, 14.0, 20.0, 2.5, 21.0, 8.0, 3.0];

    assert_eq!(contents.lines().count(), expected.len());
    for (expr, want) in contents.lines().zip(expected) {
        assert_eq!(eval(expr), want, "expression {expr:?}");
    }
}
