//! Integration tests for the glyphcalc library
//! These tests drive the public API the way a calculator front end does

use glyphcalc::constants::{E, PI};
use glyphcalc::context::EvalContext;
use glyphcalc::engine::{evaluate, evaluate_value, is_math_error};
use glyphcalc::history::History;
use glyphcalc::{Evaluator, Real, assert_approx_eq};

fn eval(expression: &str) -> String {
    evaluate(expression, &EvalContext::new()).unwrap()
}

fn value(expression: &str) -> Real {
    evaluate_value(expression, &EvalContext::new()).unwrap()
}

/// Level 1: plain arithmetic
#[test]
fn test_basic_arithmetic() {
    assert_eq!(eval("2 + 3"), "5");
    assert_eq!(eval("2 * 3 + 4"), "10");
    assert_eq!(eval("2 * (3 + 4)"), "14");
    assert_eq!(eval("7 / 2"), "3.5");
    assert_eq!(eval("10 - 2 - 3"), "5");
    assert_eq!(eval("1.5e3 + 1"), "1501");
    assert_eq!(eval("2.5e-1"), "0.25");
    assert_eq!(eval(""), "0");
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2+3*4^2"), "50");
    assert_eq!(eval("2^3^2"), "64");
    assert_eq!(eval("100/10/5"), "2");
    assert_eq!(eval("2*3^2"), "18");
    assert_eq!(eval("(2+3)^2"), "25");
}

/// Level 2: glyphs and implicit multiplication
#[test]
fn test_glyphs() {
    assert_eq!(eval("2π"), "6.283185307179586");
    assert_approx_eq!(value("π"), PI);
    assert_approx_eq!(value("ℯ"), E);
    assert_approx_eq!(value("2ℯπ"), 2.0 * E * PI);
    assert_approx_eq!(value("(1+1)π"), 2.0 * PI);
    // only glyphs multiply implicitly
    assert!(evaluate("π(1+1)", &EvalContext::new()).is_err());
}

#[test]
fn test_variable_substitution() {
    let ctx = EvalContext::new().with_x(3.0);
    assert_eq!(evaluate("x^2+2x+1", &ctx).unwrap(), "16");
    assert_eq!(evaluate("-x", &ctx).unwrap(), "-3");
    assert_eq!(evaluate("2-x", &ctx).unwrap(), "-1");
    assert_eq!(evaluate("x", &EvalContext::new()).unwrap(), "NaN");
}

/// Level 3: functions
#[test]
fn test_functions() {
    assert_eq!(eval("<sqrt>(5+<sqrt>16)"), "3");
    assert_eq!(eval("<sqrt>16+<sqrt>9"), "7");
    assert_approx_eq!(value("<sin>(π/6)"), 0.5);
    assert_approx_eq!(value("<cos>(π/3)"), 0.5);
    assert_approx_eq!(value("<tan>(π/4)"), 1.0);
    assert_approx_eq!(value("<csc>(π/6)"), 2.0);
    assert_approx_eq!(value("<sec>(π/3)"), 2.0);
    assert_approx_eq!(value("<cot>(π/4)"), 1.0);
    assert_approx_eq!(value("2*<sin>(π/2)"), 2.0);
}

#[test]
fn test_non_finite_results_are_values() {
    assert_eq!(eval("<sqrt>(0-1)"), "NaN");
    assert!(is_math_error(&eval("<sqrt>(0-1)")));
    assert_eq!(eval("<csc>0"), "inf");
    assert_eq!(eval("<cot>0"), "inf");
    assert!(!is_math_error("inf"));
}

/// Level 4: unary minus in every position
#[test]
fn test_unary_minus() {
    let cases: [(&str, Real); 12] = [
        ("-1", -1.0),
        ("--1", 1.0),
        ("---1", -1.0),
        ("2*-3", -6.0),
        ("2^-1", 0.5),
        ("-(2+3)", -5.0),
        ("3-(2)", 1.0),
        ("3--(2)", 5.0),
        ("(1)-(2)", -1.0),
        ("<sqrt>-(0-4)", 2.0),
        ("-<sqrt>4", -2.0),
        ("0--(-(1+1)--(2+-(-2)))", 2.0),
    ];
    for (expression, expected) in cases {
        assert_approx_eq!(value(expression), expected, 1e-12, "expression: {}", expression);
    }
}

#[test]
fn test_empty_groups_vanish() {
    assert_eq!(eval("()"), "0");
    assert_eq!(eval("1+()2"), "3");
    assert_eq!(eval("(()())"), "0");
}

/// Level 5: history and the previous answer
#[test]
fn test_previous_answer_chain() {
    let mut history = History::new();
    for (expression, expected) in [("6*7", "42"), ("Ⓐ/2", "21"), ("Ⓐ-1", "20"), ("2Ⓐ", "40")] {
        let ctx = EvalContext::new().with_history(&history);
        let result = evaluate(expression, &ctx).unwrap();
        assert_eq!(result, expected, "expression: {}", expression);
        history.record(expression, result);
    }
    assert_eq!(history.len(), 4);
    assert_eq!(history.answer(), 40.0);
}

#[test]
fn test_answer_defaults_to_zero() {
    let ctx = EvalContext::new().with_history(&History::new());
    assert_eq!(evaluate("Ⓐ+1", &ctx).unwrap(), "1");
}

#[test]
fn test_results_round_trip_through_the_tokenizer() {
    for expression in ["1/3", "2/3", "π/7", "ℯ^π", "<sqrt>2", "0.1*3", "1e-7/3"] {
        let text = eval(expression);
        assert_eq!(eval(&text), text, "expression: {}", expression);
        assert_eq!(text.parse::<Real>().unwrap(), value(expression));
    }
}

/// Level 6: the reusable evaluator agrees with the one-shot API
#[test]
fn test_evaluator_matches_engine() {
    let mut evaluator = Evaluator::with_capacity(4096);
    let ctx = EvalContext::new().with_x(1.25);
    for expression in ["x^2", "<sin>x+<cos>x", "(x+1)(x-1)", "2πx", "1/(x-1.25)"] {
        assert_eq!(
            evaluator.eval_with_context(expression, &ctx),
            evaluate(expression, &ctx),
            "expression: {}",
            expression
        );
    }
    evaluator.reset();
    assert_eq!(evaluator.eval("1+1").unwrap(), "2");
}
