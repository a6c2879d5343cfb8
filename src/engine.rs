//! String-in, string-out entry points.
//!
//! [`evaluate`] is what a calculator front end calls: it tokenizes, reduces
//! and formats the result, using a fresh arena per call. Callers evaluating
//! many expressions in a row should keep an [`Evaluator`](crate::Evaluator)
//! instead.

use alloc::format;
use alloc::string::String;

use bumpalo::Bump;
use tracing::debug;

use crate::Real;
use crate::context::EvalContext;
use crate::error::Result;
use crate::eval::eval_tokens;
use crate::lexer::tokenize;

/// Evaluates `expression` and formats the result.
///
/// The result uses the shortest decimal text that parses back to the same
/// `f64`: `"4"`, `"6.283185307179586"`, `"NaN"`, `"inf"`.
///
/// # Examples
///
/// ```
/// use glyphcalc::context::EvalContext;
/// use glyphcalc::engine::evaluate;
///
/// let ctx = EvalContext::new();
/// assert_eq!(evaluate("2^3^2", &ctx).unwrap(), "64");
/// assert_eq!(evaluate("2π", &ctx).unwrap(), "6.283185307179586");
/// ```
pub fn evaluate(expression: &str, ctx: &EvalContext) -> Result<String> {
    evaluate_value(expression, ctx).map(format_result)
}

/// Evaluates `expression` to a number.
pub fn evaluate_value(expression: &str, ctx: &EvalContext) -> Result<Real> {
    let bump = Bump::new();
    evaluate_in(expression, ctx, &bump)
}

/// Evaluates `expression` with its tokens allocated in `bump`.
pub fn evaluate_in(expression: &str, ctx: &EvalContext, bump: &Bump) -> Result<Real> {
    let tokens = tokenize(expression, ctx, bump);
    eval_tokens(tokens, ctx, bump).inspect_err(|err| {
        debug!(expression, error = %err, "evaluation failed");
    })
}

/// Formats a value the way [`evaluate`] returns it.
pub fn format_result(value: Real) -> String {
    format!("{}", value)
}

/// Whether a result string is the not-a-number marker.
///
/// `NaN` is a successful evaluation; front ends use this to show it as a math
/// error instead of a number.
pub fn is_math_error(result: &str) -> bool {
    result == "NaN"
}
