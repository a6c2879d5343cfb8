use glyphcalc::context::EvalContext;
use glyphcalc::engine::evaluate;
use glyphcalc::error::EvalError;
use glyphcalc::types::lexeme;

fn eval_err(expression: &str) -> EvalError {
    match evaluate(expression, &EvalContext::new()) {
        Ok(result) => panic!("expected an error for {expression:?}, got {result}"),
        Err(err) => err,
    }
}

#[test]
fn test_parenthesis_errors() {
    assert_eq!(eval_err("(1+2"), EvalError::UnmatchedOpenParen);
    assert_eq!(eval_err("1+2)"), EvalError::UnmatchedCloseParen);
    assert_eq!(eval_err("((2)"), EvalError::UnmatchedOpenParen);
    assert_eq!(eval_err("(2))"), EvalError::UnmatchedCloseParen);
}

#[test]
fn test_function_errors() {
    assert_eq!(eval_err("2+<sqrt>"), EvalError::MissingFunctionArgument);
    assert_eq!(eval_err("<sin>+1"), EvalError::InvalidFunctionArgument);
    assert_eq!(
        eval_err("<ln>2"),
        EvalError::UnknownFunction { name: lexeme("ln") }
    );
}

#[test]
fn test_operator_errors() {
    assert_eq!(eval_err("5/0"), EvalError::DivisionByZero);
    assert_eq!(eval_err("1/(2-2)"), EvalError::DivisionByZero);
    assert_eq!(eval_err("3*"), EvalError::MissingOperand);
    assert_eq!(eval_err("^3"), EvalError::MissingOperand);
    assert_eq!(eval_err("1 2"), EvalError::NotEnoughOperators);
    assert_eq!(
        eval_err("4%2"),
        EvalError::InvalidOperator { symbol: lexeme("%") }
    );
}

#[test]
fn test_invalid_result() {
    assert_eq!(eval_err("*"), EvalError::InvalidResult);
    assert_eq!(eval_err("1..2"), EvalError::InvalidResult);
}

#[test]
fn test_nesting_limit() {
    let ctx = EvalContext::new().with_max_nesting_depth(1);
    assert_eq!(evaluate("(1)+(2)", &ctx).unwrap(), "3");
    assert_eq!(
        evaluate("((1))", &ctx),
        Err(EvalError::NestingTooDeep { depth: 2, limit: 1 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        eval_err("<log>2").to_string(),
        "Unknown function: 'log'"
    );
    assert_eq!(
        EvalError::NestingTooDeep { depth: 9, limit: 4 }.to_string(),
        "Parentheses nested 9 deep (maximum is 4)"
    );
}

#[test]
fn test_errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(eval_err("5/0"));
    assert_eq!(err.to_string(), "Division by zero");
}
