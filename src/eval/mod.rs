//! Expression evaluation module for glyphcalc
//!
//! This module turns a token sequence into a number: the nesting guard runs
//! first, then the phase-ordered reduction in [`reduce`].

pub mod nesting;
pub mod reduce;

pub use nesting::{check_nesting_depth, nesting_depth};
pub use reduce::reduce;

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;

use crate::Real;
use crate::context::EvalContext;
use crate::error::Result;
use crate::types::Token;

/// Evaluates an already tokenized expression under the limits in `ctx`.
pub fn eval_tokens<'bump>(
    tokens: BumpVec<'bump, Token>,
    ctx: &EvalContext,
    bump: &'bump Bump,
) -> Result<Real> {
    check_nesting_depth(&tokens, ctx.max_nesting_depth)?;
    reduce(tokens, bump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::lexer::tokenize;
    use alloc::string::String;

    fn eval_with(expression: &str, ctx: &EvalContext) -> Result<Real> {
        let bump = Bump::new();
        let tokens = tokenize(expression, ctx, &bump);
        let result = eval_tokens(tokens, ctx, &bump);
        result
    }

    #[test]
    fn test_nesting_limit_applies_before_reduction() {
        let ctx = EvalContext::new().with_max_nesting_depth(2);
        assert_eq!(eval_with("((1+1))", &ctx), Ok(2.0));
        assert_eq!(
            eval_with("(((1+1)))", &ctx),
            Err(EvalError::NestingTooDeep { depth: 3, limit: 2 })
        );
        // the limit wins over errors reduction would find
        assert_eq!(
            eval_with("(((5/0)))", &ctx),
            Err(EvalError::NestingTooDeep { depth: 3, limit: 2 })
        );
    }

    #[test]
    fn test_deep_nesting_within_default_limit() {
        let depth = 200;
        let mut expression = String::new();
        for _ in 0..depth {
            expression.push('(');
        }
        expression.push('7');
        for _ in 0..depth {
            expression.push(')');
        }
        assert_eq!(eval_with(&expression, &EvalContext::new()), Ok(7.0));
    }

    #[test]
    fn test_context_values_flow_through() {
        let ctx = EvalContext::new().with_x(4.0).with_answer(10.0);
        assert_eq!(eval_with("Ⓐ-x", &ctx), Ok(6.0));
        assert_eq!(eval_with("2x", &ctx), Ok(8.0));
        assert!(eval_with("x", &EvalContext::new()).unwrap().is_nan());
    }
}
